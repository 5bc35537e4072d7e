//! Form controls missing validation affordances.
//!
//! Three independent sub-conditions, checked in order, first match wins:
//! email inputs without `required`, password inputs without
//! `aria-describedby`, and required fields without an accessible label.

use crate::audit::context::RuleContext;
use crate::audit::result::Violation;
use crate::audit::rule::{Rule, RuleCategory, Severity};

const FORM_TAGS: [&str; 3] = ["input", "select", "textarea"];

pub fn rule() -> Rule {
    Rule {
        name: "form-validation",
        description: "Detect form elements missing proper validation attributes",
        category: RuleCategory::FormSemantics,
        severity: Severity::Warn,
        check,
    }
}

fn check(ctx: &RuleContext) -> Option<Violation> {
    let el = ctx.element;
    if !FORM_TAGS.contains(&el.tag.as_str()) {
        return None;
    }

    let is_required = el.has_attribute("required") || el.has_attribute("aria-required");

    // Type-specific checks only apply to <input> with a literal type.
    if el.tag == "input" {
        if let Some(input_type) = el.attribute_literal("type") {
            if input_type == "email" && !is_required {
                return Some(Violation::new(
                    "form-validation",
                    RuleCategory::FormSemantics,
                    Severity::Warn,
                    "Email input should have required attribute for better validation",
                ));
            }

            if input_type == "password" && !el.has_attribute("aria-describedby") {
                return Some(Violation::new(
                    "form-validation",
                    RuleCategory::FormSemantics,
                    Severity::Info,
                    "Password input should have aria-describedby for password requirements",
                ));
            }
        }
    }

    if is_required {
        let has_aria_label =
            el.has_attribute("aria-label") || el.has_attribute("aria-labelledby");

        if !has_aria_label {
            return Some(Violation::new(
                "form-validation",
                RuleCategory::FormSemantics,
                Severity::Warn,
                "Required form field should have aria-label or aria-labelledby",
            ));
        }
    }

    None
}
