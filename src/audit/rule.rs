//! Audit rule definitions.
//!
//! This module provides the core types for defining audit rules:
//!
//! - [`Rule`] - a named, categorized, severity-tagged check
//! - [`RuleCategory`] - what aspect of the markup a rule covers
//! - [`Severity`] - severity level for violations (Info, Warn, Error)
//!
//! A rule is a closed, data-carrying value: identity fields plus a plain
//! function pointer. There is no rule trait hierarchy; the registry is a
//! flat ordered list.

use serde::Serialize;

use super::context::RuleContext;
use super::result::Violation;

/// What aspect of the markup a rule covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleCategory {
    /// Accessibility for assistive technology.
    #[serde(rename = "a11y")]
    Accessibility,
    /// Form field semantics and validation affordances.
    #[serde(rename = "form")]
    FormSemantics,
    /// Structural/document semantics.
    #[serde(rename = "semantic")]
    StructuralSemantics,
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleCategory::Accessibility => write!(f, "a11y"),
            RuleCategory::FormSemantics => write!(f, "form"),
            RuleCategory::StructuralSemantics => write!(f, "semantic"),
        }
    }
}

/// Severity level for audit violations.
///
/// Ordinal for display and sorting only; severities are never combined
/// numerically into the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    /// Informational finding.
    #[serde(rename = "info")]
    Info,
    /// Should be addressed.
    #[serde(rename = "warn")]
    Warn,
    /// Accessibility failure.
    #[serde(rename = "error")]
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single audit rule.
///
/// `check` is a pure observation: given the current element (plus raw source
/// text), it returns at most one violation and never mutates the tree. The
/// `severity` field is the rule's default for display; individual violations
/// may carry their own per-condition severity.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Unique, stable rule name. Consumers use it to filter or suppress.
    pub name: &'static str,
    /// Human-readable description. Not evaluated.
    pub description: &'static str,
    /// Category of the rule.
    pub category: RuleCategory,
    /// Default severity.
    pub severity: Severity,
    /// The predicate: at most one violation per element per run.
    pub check: fn(&RuleContext) -> Option<Violation>,
}
