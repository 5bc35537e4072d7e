//! Form controls without an `id` to associate a `<label>` with.

use crate::audit::context::RuleContext;
use crate::audit::result::Violation;
use crate::audit::rule::{Rule, RuleCategory, Severity};

const FORM_TAGS: [&str; 3] = ["input", "select", "textarea"];

pub fn rule() -> Rule {
    Rule {
        name: "missing-label",
        description: "Detect input elements without labels or identifiers",
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

    if el.has_attribute("id") {
        return None;
    }

    // The message leads with a display-cased tag name; computed locally so
    // the tree itself stays untouched.
    let display_tag = capitalize(&el.tag);
    Some(Violation::new(
        "missing-label",
        RuleCategory::FormSemantics,
        Severity::Warn,
        format!("{display_tag} element may be missing an associated <label> (no id or label found)"),
    ))
}

fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Attribute, Element};

    fn check_element(el: &Element) -> Option<Violation> {
        check(&RuleContext::new(el, ""))
    }

    #[test]
    fn fires_on_input_without_id() {
        let el = Element::new("input");
        let violation = check_element(&el).unwrap();

        assert_eq!(violation.name, "missing-label");
        assert_eq!(violation.severity, Severity::Warn);
        assert!(violation.message.starts_with("Input element"));
    }

    #[test]
    fn fires_on_select_and_textarea() {
        assert!(check_element(&Element::new("select")).is_some());
        assert!(check_element(&Element::new("textarea")).is_some());
    }

    #[test]
    fn passes_with_id() {
        let el = Element::new("input").with_attribute(Attribute::literal("id", "email"));
        assert!(check_element(&el).is_none());
    }

    #[test]
    fn ignores_other_tags() {
        assert!(check_element(&Element::new("div")).is_none());
        assert!(check_element(&Element::new("Input")).is_none());
    }

    #[test]
    fn does_not_mutate_the_element() {
        let el = Element::new("textarea");
        let _ = check_element(&el);
        // Display casing in the message must not leak back into the tree.
        assert_eq!(el.tag, "textarea");
    }
}
