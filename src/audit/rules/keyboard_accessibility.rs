//! Interactive elements unreachable or unusable from the keyboard.
//!
//! Applies to the common interactive tags plus `div`/`span`, filtered to
//! elements that actually look interactive (a click handler or an explicit
//! role). Three conditions in order, first match wins: non-focusable
//! `div`/`span` with a click handler, click handling without keyboard
//! handling, and interactive elements with no ARIA affordances at all.

use crate::audit::context::RuleContext;
use crate::audit::result::Violation;
use crate::audit::rule::{Rule, RuleCategory, Severity};
use crate::markup::Element;

const INTERACTIVE_TAGS: [&str; 7] = ["button", "a", "input", "select", "textarea", "div", "span"];

pub fn rule() -> Rule {
    Rule {
        name: "keyboard-accessibility",
        description: "Detect interactive elements missing keyboard accessibility",
        category: RuleCategory::Accessibility,
        severity: Severity::Error,
        check,
    }
}

fn has_click_handler(el: &Element) -> bool {
    el.has_attribute("onClick") || el.has_attribute("onKeyDown") || el.has_attribute("onKeyUp")
}

fn has_keyboard_handler(el: &Element) -> bool {
    el.has_attribute("onKeyDown") || el.has_attribute("onKeyUp") || el.has_attribute("onKeyPress")
}

fn check(ctx: &RuleContext) -> Option<Violation> {
    let el = ctx.element;
    if !INTERACTIVE_TAGS.contains(&el.tag.as_str()) {
        return None;
    }

    let click_handler = has_click_handler(el);
    let has_role = el.has_attribute("role");
    let is_interactive = click_handler || has_role;

    if !is_interactive {
        return None;
    }

    let keyboard_handler = has_keyboard_handler(el);
    let has_tab_index = el.has_attribute("tabIndex");
    let has_aria_attributes =
        el.has_attribute("aria-label") || el.has_attribute("aria-labelledby") || has_role;

    // div/span are not naturally focusable; a click handler alone leaves
    // keyboard users stranded.
    if (el.tag == "div" || el.tag == "span") && click_handler && !has_tab_index && !has_role {
        return Some(Violation::new(
            "keyboard-accessibility",
            RuleCategory::Accessibility,
            Severity::Error,
            "Interactive div/span should have tabIndex or role for keyboard accessibility",
        ));
    }

    if click_handler && !keyboard_handler {
        return Some(Violation::new(
            "keyboard-accessibility",
            RuleCategory::Accessibility,
            Severity::Warn,
            "Interactive element should support keyboard events (Enter/Space)",
        ));
    }

    if !has_aria_attributes {
        return Some(Violation::new(
            "keyboard-accessibility",
            RuleCategory::Accessibility,
            Severity::Warn,
            "Interactive element should have proper ARIA attributes for screen readers",
        ));
    }

    None
}
