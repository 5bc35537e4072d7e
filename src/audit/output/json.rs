//! JSON report formatter.
//!
//! A verbatim structural dump of the audit result for tooling integration:
//! `totalChecks`, `passedChecks`, `violations[]`, `score`.

use std::io::Write;

use super::ReportFormatter;
use crate::audit::AuditResult;

/// Formats the audit result as pretty-printed JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, result: &AuditResult, writer: &mut W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(writer, result).map_err(std::io::Error::other)
    }
}
