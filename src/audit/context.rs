//! Read-only context passed to each rule invocation.

use crate::markup::Element;

/// The context a rule sees for one element visit.
///
/// Rules receive shared borrows only: a check observes the tree, it never
/// edits it. No state is carried between invocations.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// The element currently being visited.
    pub element: &'a Element,
    /// The full original source text. Reserved for rules that need raw text
    /// (e.g. locating line/column); no built-in rule reads it yet.
    pub source: &'a str,
}

impl<'a> RuleContext<'a> {
    /// Create a context for one element visit.
    pub fn new(element: &'a Element, source: &'a str) -> Self {
        Self { element, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_borrows_element_and_source() {
        let element = Element::new("img");
        let source = r#"<img src="x.png" />"#;

        let ctx = RuleContext::new(&element, source);
        assert_eq!(ctx.element.tag, "img");
        assert_eq!(ctx.source, source);
    }
}
