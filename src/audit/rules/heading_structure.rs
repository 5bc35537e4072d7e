//! Heading usage reminders.
//!
//! This is a single-element check: it can only remind about `h1` usage.
//! Skipped-level detection (h1 -> h3) needs document-wide heading state,
//! which is outside the one-element-at-a-time rule contract.

use crate::audit::context::RuleContext;
use crate::audit::result::Violation;
use crate::audit::rule::{Rule, RuleCategory, Severity};
use crate::markup::is_heading_tag;

pub fn rule() -> Rule {
    Rule {
        name: "heading-structure",
        description: "Detect improper heading hierarchy and missing heading levels",
        category: RuleCategory::Accessibility,
        severity: Severity::Warn,
        check,
    }
}

fn check(ctx: &RuleContext) -> Option<Violation> {
    let el = ctx.element;
    if !is_heading_tag(&el.tag) {
        return None;
    }

    if el.tag == "h1" {
        return Some(Violation::new(
            "heading-structure",
            RuleCategory::Accessibility,
            Severity::Info,
            "Ensure this h1 is the main heading and there is only one h1 per page",
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::Element;

    fn check_element(el: &Element) -> Option<Violation> {
        check(&RuleContext::new(el, ""))
    }

    #[test]
    fn h1_gets_an_informational_reminder() {
        let el = Element::new("h1").with_text("Title");
        let violation = check_element(&el).unwrap();

        assert_eq!(violation.name, "heading-structure");
        assert_eq!(violation.severity, Severity::Info);
    }

    #[test]
    fn other_heading_levels_pass() {
        for tag in ["h2", "h3", "h4", "h5", "h6"] {
            assert!(check_element(&Element::new(tag)).is_none(), "{tag} fired");
        }
    }

    #[test]
    fn ignores_non_heading_tags() {
        assert!(check_element(&Element::new("header")).is_none());
        assert!(check_element(&Element::new("h7")).is_none());
        assert!(check_element(&Element::new("H1")).is_none());
    }
}
