//! `<img>` tags without an `alt` attribute.

use crate::audit::context::RuleContext;
use crate::audit::result::Violation;
use crate::audit::rule::{Rule, RuleCategory, Severity};

pub fn rule() -> Rule {
    Rule {
        name: "missing-alt",
        description: "Detect <img> tags missing alt attribute",
        category: RuleCategory::Accessibility,
        severity: Severity::Error,
        check,
    }
}

fn check(ctx: &RuleContext) -> Option<Violation> {
    let el = ctx.element;
    if el.tag != "img" {
        return None;
    }

    if el.has_attribute("alt") {
        return None;
    }

    Some(Violation::new(
        "missing-alt",
        RuleCategory::Accessibility,
        Severity::Error,
        "<img> tag is missing an alt attribute",
    ))
}
