//! Violations, the audit result, and the scorer.
//!
//! [`AuditResult`] is the immutable output of one audit run. Its arithmetic
//! is deliberately coarse and must stay that way: `total_checks` is the
//! number of registered rules (not elements visited), `passed_checks` is
//! `total_checks - violations.len()` and may go negative when several
//! elements trip the same rule, and the score floors the resulting
//! percentage at zero. Downstream reports assert on exactly this behavior.

use serde::Serialize;

use super::rule::{RuleCategory, Severity};

/// A structured finding emitted by exactly one rule against exactly one
/// element. Created once, never merged or deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Name of the rule that emitted this violation.
    pub name: String,
    /// Category, copied from the rule.
    #[serde(rename = "type")]
    pub category: RuleCategory,
    /// Severity of this particular finding.
    pub severity: Severity,
    /// Final, human-readable message. No further templating downstream.
    pub message: String,
    /// Source location. Reserved; currently never populated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Violation {
    /// Create a new violation.
    pub fn new(
        name: impl Into<String>,
        category: RuleCategory,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            severity,
            message: message.into(),
            location: None,
        }
    }
}

/// The immutable output of one audit run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// Number of rules registered for the run. Independent of tree size.
    pub total_checks: usize,
    /// `total_checks - violations.len()`. Signed: more violations than
    /// registered rules drives this negative, and it is reported as-is so
    /// that `passed_checks + violations.len() == total_checks` always holds.
    pub passed_checks: i64,
    /// Violations in document visitation order.
    pub violations: Vec<Violation>,
    /// Integer score in `[0, 100]`.
    pub score: u8,
}

impl AuditResult {
    /// Assemble a result from the registered rule count and the collected
    /// violations, computing `passed_checks` and the score.
    pub fn new(total_checks: usize, violations: Vec<Violation>) -> Self {
        let passed_checks = total_checks as i64 - violations.len() as i64;
        Self {
            total_checks,
            passed_checks,
            violations,
            score: score(total_checks, passed_checks),
        }
    }

    /// Count violations at a given severity.
    pub fn count_severity(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }

    /// Whether any violation is at [`Severity::Error`].
    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.severity == Severity::Error)
    }
}

/// `max(0, round(passed / total * 100))`, capped at 100 by construction
/// since `passed` never exceeds `total`.
///
/// Zero registered rules means zero checks and zero violations; that vacuous
/// case scores 100.
fn score(total_checks: usize, passed_checks: i64) -> u8 {
    if total_checks == 0 {
        return 100;
    }
    let pct = (passed_checks as f64 / total_checks as f64) * 100.0;
    pct.round().clamp(0.0, 100.0) as u8
}
