//! Markdown report formatter.
//!
//! Renders a report document with a summary header and one numbered section
//! per violation, or a sentinel line when the audit is clean.

use std::io::Write;

use super::ReportFormatter;
use crate::audit::AuditResult;

/// Formats the audit result as a Markdown document.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new Markdown formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format<W: Write>(&self, result: &AuditResult, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "# UXRay Audit Report")?;
        writeln!(writer)?;
        // Trailing double spaces are Markdown hard line breaks.
        writeln!(writer, "**Score**: {}  ", result.score)?;
        writeln!(
            writer,
            "**Passed Checks**: {} / {}  ",
            result.passed_checks, result.total_checks
        )?;
        writeln!(writer, "**Violations**: {}", result.violations.len())?;
        writeln!(writer)?;

        if result.violations.is_empty() {
            writeln!(writer, "✅ No violations found!")?;
            return Ok(());
        }

        for (index, violation) in result.violations.iter().enumerate() {
            writeln!(writer, "### {}. {}", index + 1, violation.message)?;
            writeln!(writer, "- **Type**: {}", violation.category)?;
            writeln!(writer, "- **Severity**: {}", violation.severity)?;
            writeln!(writer)?;
        }

        Ok(())
    }
}
