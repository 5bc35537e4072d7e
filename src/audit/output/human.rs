//! Human-readable terminal formatter.
//!
//! Renders one `severity[rule-name]: message` line per violation followed by
//! severity counts and the score summary.

use std::io::Write;

use super::ReportFormatter;
use crate::audit::{AuditResult, Severity};

/// Formats the audit result for terminal display.
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, result: &AuditResult, writer: &mut W) -> std::io::Result<()> {
        for violation in &result.violations {
            writeln!(
                writer,
                "{}[{}]: {}",
                violation.severity, violation.name, violation.message
            )?;
        }

        if !result.violations.is_empty() {
            writeln!(writer)?;
            writeln!(
                writer,
                "Found {} error(s), {} warning(s) and {} hint(s)",
                result.count_severity(Severity::Error),
                result.count_severity(Severity::Warn),
                result.count_severity(Severity::Info),
            )?;
        }

        writeln!(
            writer,
            "Score: {}/100 ({} of {} checks passed)",
            result.score, result.passed_checks, result.total_checks
        )?;

        Ok(())
    }
}
