//! `<a>` tags without an `href` attribute.

use crate::audit::context::RuleContext;
use crate::audit::result::Violation;
use crate::audit::rule::{Rule, RuleCategory, Severity};

pub fn rule() -> Rule {
    Rule {
        name: "anchor-without-href",
        description: "Detect <a> tags without href attribute",
        category: RuleCategory::StructuralSemantics,
        severity: Severity::Warn,
        check,
    }
}

fn check(ctx: &RuleContext) -> Option<Violation> {
    let el = ctx.element;
    if el.tag != "a" {
        return None;
    }

    if el.has_attribute("href") {
        return None;
    }

    Some(Violation::new(
        "anchor-without-href",
        RuleCategory::StructuralSemantics,
        Severity::Warn,
        "<a> tag is missing an href attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Attribute, Element};

    fn check_element(el: &Element) -> Option<Violation> {
        check(&RuleContext::new(el, ""))
    }

    #[test]
    fn fires_on_anchor_without_href() {
        let el = Element::new("a").with_text("Click me");
        let violation = check_element(&el).unwrap();

        assert_eq!(violation.name, "anchor-without-href");
        assert_eq!(violation.severity, Severity::Warn);
        assert_eq!(violation.category, RuleCategory::StructuralSemantics);
    }

    #[test]
    fn passes_with_href() {
        let el = Element::new("a").with_attribute(Attribute::literal("href", "/home"));
        assert!(check_element(&el).is_none());
    }

    #[test]
    fn passes_with_expression_href() {
        let el = Element::new("a").with_attribute(Attribute::expression("href"));
        assert!(check_element(&el).is_none());
    }

    #[test]
    fn ignores_other_tags() {
        assert!(check_element(&Element::new("area")).is_none());
        assert!(check_element(&Element::new("A")).is_none());
    }
}
