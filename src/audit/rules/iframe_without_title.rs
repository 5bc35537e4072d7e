//! `<iframe>` elements without a `title`.

use crate::audit::context::RuleContext;
use crate::audit::result::Violation;
use crate::audit::rule::{Rule, RuleCategory, Severity};

pub fn rule() -> Rule {
    Rule {
        name: "iframe-without-title",
        description: "Detect iframe elements without a title",
        category: RuleCategory::Accessibility,
        severity: Severity::Warn,
        check,
    }
}

fn check(ctx: &RuleContext) -> Option<Violation> {
    let el = ctx.element;
    if el.tag != "iframe" {
        return None;
    }

    if el.has_attribute("title") {
        return None;
    }

    Some(Violation::new(
        "iframe-without-title",
        RuleCategory::Accessibility,
        Severity::Warn,
        "iframe element is missing a title",
    ))
}
