//! Tables missing accessible naming or header structure.
//!
//! Two checks in order, first match wins: no accessible name at all
//! (caption child, aria-label/aria-labelledby, or summary attribute), then
//! no `<thead>` child. A table can only report one of the two per run.

use crate::audit::context::RuleContext;
use crate::audit::result::Violation;
use crate::audit::rule::{Rule, RuleCategory, Severity};

pub fn rule() -> Rule {
    Rule {
        name: "table-accessibility",
        description: "Detect tables missing proper accessibility features",
        category: RuleCategory::Accessibility,
        severity: Severity::Warn,
        check,
    }
}

fn check(ctx: &RuleContext) -> Option<Violation> {
    let el = ctx.element;
    if el.tag != "table" {
        return None;
    }

    let has_caption = el.has_child_element(|child| child.tag == "caption");
    let has_headers = el.has_child_element(|child| child.tag == "thead");
    let has_aria_label =
        el.has_attribute("aria-label") || el.has_attribute("aria-labelledby");
    // summary is deprecated but still honored as an accessible name.
    let has_summary = el.has_attribute("summary");

    if !has_caption && !has_aria_label && !has_summary {
        return Some(Violation::new(
            "table-accessibility",
            RuleCategory::Accessibility,
            Severity::Warn,
            "Table should have a caption, aria-label, or summary for accessibility",
        ));
    }

    if !has_headers {
        return Some(Violation::new(
            "table-accessibility",
            RuleCategory::Accessibility,
            Severity::Warn,
            "Table should have proper header structure (thead) for accessibility",
        ));
    }

    None
}
