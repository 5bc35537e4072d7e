//! Sectioning landmarks without a heading to announce them.

use crate::audit::context::RuleContext;
use crate::audit::result::Violation;
use crate::audit::rule::{Rule, RuleCategory, Severity};
use crate::markup::is_heading_tag;

const LANDMARK_TAGS: [&str; 7] = [
    "nav", "main", "aside", "header", "footer", "section", "article",
];

pub fn rule() -> Rule {
    Rule {
        name: "landmark-elements",
        description: "Detect missing or improper landmark elements for page structure",
        category: RuleCategory::Accessibility,
        severity: Severity::Warn,
        check,
    }
}

fn check(ctx: &RuleContext) -> Option<Violation> {
    let el = ctx.element;
    if !LANDMARK_TAGS.contains(&el.tag.as_str()) {
        return None;
    }

    let has_role = el.has_attribute("role");

    // Only section and article are expected to announce themselves with a
    // direct heading child; an explicit role opts out.
    if (el.tag == "section" || el.tag == "article") && !has_role {
        let has_heading = el.has_child_element(|child| is_heading_tag(&child.tag));

        if !has_heading {
            return Some(Violation::new(
                "landmark-elements",
                RuleCategory::Accessibility,
                Severity::Warn,
                format!(
                    "{} element should have a heading or aria-label for accessibility",
                    el.tag
                ),
            ));
        }
    }

    None
}
