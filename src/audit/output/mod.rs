//! Report formatters.
//!
//! This module provides formatters for rendering an [`AuditResult`] in
//! different formats (human-readable terminal output, JSON, Markdown).

pub mod human;
pub mod json;
pub mod markdown;

use std::io::Write;
use std::str::FromStr;

use crate::audit::AuditResult;

/// Report format for exported audit results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Markdown,
}

impl ReportFormat {
    /// File extension used for the default output filename.
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "md",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(format!("unknown report format: {}", s)),
        }
    }
}

/// Trait for rendering an audit result to a writer.
pub trait ReportFormatter {
    /// Format the result to the given writer.
    fn format<W: Write>(&self, result: &AuditResult, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_str() {
        assert_eq!("json".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert_eq!("md".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("MARKDOWN".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert!("xml".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn format_extension() {
        assert_eq!(ReportFormat::Json.extension(), "json");
        assert_eq!(ReportFormat::Markdown.extension(), "md");
    }
}
