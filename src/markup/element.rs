//! Normalized markup element model.
//!
//! This module provides the tree the audit engine runs against:
//!
//! - [`Element`] - one tag instance with attributes and children
//! - [`Attribute`] / [`AttributeValue`] - named attributes with literal,
//!   expression, or bare values
//! - [`Child`] - element, text, or embedded-container child nodes
//!
//! The model is deliberately permissive: any string is a valid tag name,
//! duplicate attributes are legal, and unknown component tags (capitalized)
//! are ordinary elements that simply fail rule tag filters.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^h[1-6]$").unwrap());

/// Check whether a tag name is a standard heading tag (`h1`..`h6`).
///
/// Case-sensitive: `H1` is a component tag, not a heading.
pub fn is_heading_tag(tag: &str) -> bool {
    HEADING_TAG.is_match(tag)
}

/// The value of a markup attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A literal string value: `type="email"`.
    Literal(String),
    /// An expression container: `onClick={handler}`. The expression itself
    /// is opaque to the engine.
    Expression,
    /// A value-less attribute: `required`.
    Bare,
}

/// A single attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, verbatim and case-sensitive.
    pub name: String,
    /// Attribute value.
    pub value: AttributeValue,
}

impl Attribute {
    /// Create an attribute with a literal string value.
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Literal(value.into()),
        }
    }

    /// Create an attribute whose value is an expression container.
    pub fn expression(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Expression,
        }
    }

    /// Create a value-less attribute.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Bare,
        }
    }

    /// The literal string value, if this attribute carries one.
    pub fn literal_value(&self) -> Option<&str> {
        match &self.value {
            AttributeValue::Literal(s) => Some(s),
            _ => None,
        }
    }
}

/// A child node of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// A nested element.
    Element(Element),
    /// Raw text content (whitespace preserved).
    Text(String),
    /// An embedded container (expression container or fragment). Carries any
    /// element roots found inside it so traversal can reach them, but is not
    /// a direct element child for child-inspection purposes.
    Embedded(Vec<Element>),
}

/// One markup element: tag name, ordered attributes, ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name, verbatim and case-sensitive.
    pub tag: String,
    /// Attributes in source order. Duplicates are legal; lookup returns the
    /// first match.
    pub attributes: Vec<Attribute>,
    /// Children in source order.
    pub children: Vec<Child>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute (builder style).
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add a child node (builder style).
    pub fn with_child(mut self, child: Child) -> Self {
        self.children.push(child);
        self
    }

    /// Add a text child (builder style).
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Child::Text(text.into()))
    }

    /// Look up an attribute by name. Case-sensitive; first match wins when
    /// duplicates exist.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Check whether an attribute is present, regardless of its value.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// The literal string value of an attribute, if present and literal.
    pub fn attribute_literal(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(Attribute::literal_value)
    }

    /// Iterate over attributes whose name starts with `aria-`.
    pub fn aria_attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter().filter(|a| a.name.starts_with("aria-"))
    }

    /// Iterate over direct element children. Embedded containers are opaque
    /// here: an element inside `{...}` is not a direct element child.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Child::Element(el) => Some(el),
            _ => None,
        })
    }

    /// Check whether any direct element child satisfies a predicate.
    pub fn has_child_element(&self, pred: impl Fn(&Element) -> bool) -> bool {
        self.child_elements().any(pred)
    }

    /// Concatenated direct text children, trimmed.
    ///
    /// Only direct text nodes count: text inside nested elements or embedded
    /// containers does not contribute.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            if let Child::Text(t) = child {
                text.push_str(t);
            }
        }
        text.trim().to_string()
    }

    /// Check whether the element has visible direct text content.
    pub fn has_visible_text(&self) -> bool {
        self.children
            .iter()
            .any(|c| matches!(c, Child::Text(t) if !t.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_tag_matching() {
        assert!(is_heading_tag("h1"));
        assert!(is_heading_tag("h6"));
        assert!(!is_heading_tag("h7"));
        assert!(!is_heading_tag("H1"));
        assert!(!is_heading_tag("header"));
    }

    #[test]
    fn attribute_lookup_is_case_sensitive() {
        let el = Element::new("input").with_attribute(Attribute::bare("required"));

        assert!(el.has_attribute("required"));
        assert!(!el.has_attribute("Required"));
    }

    #[test]
    fn duplicate_attributes_first_match_wins() {
        let el = Element::new("input")
            .with_attribute(Attribute::literal("type", "email"))
            .with_attribute(Attribute::literal("type", "text"));

        assert_eq!(el.attribute_literal("type"), Some("email"));
    }

    #[test]
    fn attribute_literal_ignores_expression_values() {
        let el = Element::new("input").with_attribute(Attribute::expression("type"));

        assert!(el.has_attribute("type"));
        assert_eq!(el.attribute_literal("type"), None);
    }

    #[test]
    fn aria_attributes_filters_by_prefix() {
        let el = Element::new("div")
            .with_attribute(Attribute::literal("aria-label", "Close"))
            .with_attribute(Attribute::literal("id", "x"))
            .with_attribute(Attribute::literal("aria-hidden", "true"));

        let names: Vec<_> = el.aria_attributes().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["aria-label", "aria-hidden"]);
    }

    #[test]
    fn text_content_concatenates_direct_text_only() {
        let el = Element::new("button")
            .with_text("  Save ")
            .with_child(Child::Element(Element::new("span").with_text("nested")))
            .with_text("now  ");

        assert_eq!(el.text_content(), "Save now");
    }

    #[test]
    fn has_visible_text_ignores_whitespace_only() {
        let el = Element::new("button").with_text("   \n  ");
        assert!(!el.has_visible_text());

        let el = Element::new("button").with_text("×");
        assert!(el.has_visible_text());
    }

    #[test]
    fn child_elements_skips_embedded_containers() {
        let el = Element::new("section")
            .with_child(Child::Embedded(vec![Element::new("h2")]))
            .with_child(Child::Element(Element::new("p")));

        let tags: Vec<_> = el.child_elements().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, ["p"]);
    }

    #[test]
    fn any_string_is_a_valid_tag() {
        let el = Element::new("MyComponent");
        assert_eq!(el.tag, "MyComponent");

        let el = Element::new("Foo.Bar");
        assert_eq!(el.tag, "Foo.Bar");
    }
}
