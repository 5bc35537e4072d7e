//! `<button>` elements with no accessible label.

use crate::audit::context::RuleContext;
use crate::audit::result::Violation;
use crate::audit::rule::{Rule, RuleCategory, Severity};

pub fn rule() -> Rule {
    Rule {
        name: "button-label",
        description: "Detect <button> elements with no accessible label",
        category: RuleCategory::Accessibility,
        severity: Severity::Error,
        check,
    }
}

fn check(ctx: &RuleContext) -> Option<Violation> {
    let el = ctx.element;
    if el.tag != "button" {
        return None;
    }

    let has_aria_label = el.has_attribute("aria-label");
    let has_text = el.has_visible_text();

    if !has_text && !has_aria_label {
        return Some(Violation::new(
            "button-label",
            RuleCategory::Accessibility,
            Severity::Error,
            "<button> has no text content or aria-label",
        ));
    }

    None
}
