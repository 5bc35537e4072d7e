//! ARIA attribute usage and relationship validation.
//!
//! Applies to any element carrying `aria-*` attributes, whatever its tag.
//! Attributes are inspected in source order and the first matched condition
//! wins, so an element with several ARIA mistakes reports only the earliest
//! one per run.

use crate::audit::context::RuleContext;
use crate::audit::result::Violation;
use crate::audit::rule::{Rule, RuleCategory, Severity};

pub fn rule() -> Rule {
    Rule {
        name: "aria-validation",
        description: "Validate proper ARIA attribute usage and relationships",
        category: RuleCategory::Accessibility,
        severity: Severity::Error,
        check,
    }
}

fn check(ctx: &RuleContext) -> Option<Violation> {
    let el = ctx.element;

    for attr in el.aria_attributes() {
        if attr.name == "aria-label" {
            if let Some(value) = attr.literal_value() {
                if value.trim().is_empty() {
                    return Some(Violation::new(
                        "aria-validation",
                        RuleCategory::Accessibility,
                        Severity::Error,
                        "aria-label should not be empty",
                    ));
                }
            }
        }

        if attr.name == "aria-hidden" && attr.literal_value() == Some("true") {
            // A hidden element should not also describe itself to assistive
            // technology. A second aria-hidden does not count as "other".
            let has_other_aria = el.aria_attributes().any(|other| other.name != "aria-hidden");

            if has_other_aria {
                return Some(Violation::new(
                    "aria-validation",
                    RuleCategory::Accessibility,
                    Severity::Warn,
                    "aria-hidden=\"true\" should not be used with other ARIA attributes",
                ));
            }
        }

        if attr.name == "aria-labelledby" || attr.name == "aria-describedby" {
            if let Some(referenced_id) = attr.literal_value() {
                if referenced_id.trim().is_empty() {
                    return Some(Violation::new(
                        "aria-validation",
                        RuleCategory::Accessibility,
                        Severity::Error,
                        format!("{} should reference a valid element ID", attr.name),
                    ));
                }
            }
        }
    }

    if el.tag == "button" {
        let has_toggle_behavior =
            el.has_attribute("onClick") || el.has_attribute("onToggle");
        let has_aria_expanded = el.has_attribute("aria-expanded");

        if has_toggle_behavior && !has_aria_expanded {
            return Some(Violation::new(
                "aria-validation",
                RuleCategory::Accessibility,
                Severity::Warn,
                "Button with toggle behavior should have aria-expanded attribute",
            ));
        }
    }

    None
}
