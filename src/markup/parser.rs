//! TSX/JSX markup extraction using native tree-sitter.
//!
//! [`MarkupParser`] parses a component source file with the TSX grammar and
//! extracts every JSX element into the normalized [`Element`] model, in
//! document order. The audit engine never sees tree-sitter types; this module
//! is the boundary between raw source and the element tree.

use std::path::Path;

use tree_sitter::{Node, Parser};

use crate::error::{Result, UxrayError};

use super::element::{Attribute, AttributeValue, Child, Element};

/// TSX/JSX parser producing normalized element trees.
pub struct MarkupParser {
    parser: Parser,
}

impl MarkupParser {
    /// Create a new parser configured with the TSX grammar.
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_typescript::LANGUAGE_TSX;
        parser
            .set_language(&language.into())
            .map_err(|e| anyhow::anyhow!("failed to load TSX grammar: {e}"))?;
        Ok(Self { parser })
    }

    /// Parse a source file into its JSX element roots, in document order.
    ///
    /// A file with any syntax error is rejected whole: the engine never runs
    /// against a partial tree.
    pub fn parse(&mut self, source: &str, path: &Path) -> Result<Vec<Element>> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| UxrayError::ParseError {
                path: path.to_path_buf(),
                message: "parser returned no tree".into(),
            })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(UxrayError::ParseError {
                path: path.to_path_buf(),
                message: first_error_location(root)
                    .unwrap_or_else(|| "syntax error".to_string()),
            });
        }

        let mut roots = Vec::new();
        collect_roots(root, source, &mut roots);
        tracing::debug!(
            roots = roots.len(),
            path = %path.display(),
            "extracted markup roots"
        );
        Ok(roots)
    }
}

/// Describe the first syntax error node for the parse failure message.
fn first_error_location(node: Node) -> Option<String> {
    if node.is_error() || node.is_missing() {
        let pos = node.start_position();
        return Some(format!(
            "syntax error at line {}, column {}",
            pos.row + 1,
            pos.column + 1
        ));
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error_location(child) {
            return Some(found);
        }
    }
    None
}

/// Collect JSX element roots beneath `node`, recursing through everything
/// that is not itself a JSX element (statements, fragments, expressions).
fn collect_roots(node: Node, source: &str, out: &mut Vec<Element>) {
    match node.kind() {
        "jsx_element" | "jsx_self_closing_element" => {
            out.push(convert_element(node, source));
        }
        _ => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                collect_roots(child, source, out);
            }
        }
    }
}

fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

/// Convert a `jsx_element` or `jsx_self_closing_element` CST node.
fn convert_element(node: Node, source: &str) -> Element {
    if node.kind() == "jsx_self_closing_element" {
        return Element {
            tag: element_tag(node, source),
            attributes: convert_attributes(node, source),
            children: Vec::new(),
        };
    }

    // jsx_element: opening element, content nodes, closing element.
    let opening = node.child(0);
    let (tag, attributes) = match opening {
        Some(op) if op.kind() == "jsx_opening_element" => {
            (element_tag(op, source), convert_attributes(op, source))
        }
        _ => (String::new(), Vec::new()),
    };

    let mut children = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "jsx_element" | "jsx_self_closing_element" => {
                children.push(Child::Element(convert_element(child, source)));
            }
            "jsx_text" | "html_character_reference" => {
                children.push(Child::Text(node_text(child, source).to_string()));
            }
            "jsx_expression" | "jsx_fragment" => {
                let mut nested = Vec::new();
                let mut inner = child.walk();
                for grandchild in child.children(&mut inner) {
                    collect_roots(grandchild, source, &mut nested);
                }
                children.push(Child::Embedded(nested));
            }
            _ => {}
        }
    }

    Element {
        tag,
        attributes,
        children,
    }
}

/// Tag name of an opening or self-closing element node, verbatim.
///
/// Member-expression tags (`Foo.Bar`) and namespaced tags come through as
/// their full source text.
fn element_tag(node: Node, source: &str) -> String {
    node.child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default()
}

/// Convert the `jsx_attribute` children of an opening element.
///
/// Spread attributes (`{...props}`) are expression children of the opening
/// element, not `jsx_attribute` nodes, and are skipped.
fn convert_attributes(node: Node, source: &str) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() != "jsx_attribute" {
            continue;
        }
        let Some(name_node) = child.named_child(0) else {
            continue;
        };
        let name = node_text(name_node, source).to_string();
        let value = match child.named_child(1) {
            Some(value_node) if value_node.kind() == "string" => {
                AttributeValue::Literal(string_literal_content(value_node, source))
            }
            Some(_) => AttributeValue::Expression,
            None => AttributeValue::Bare,
        };
        attributes.push(Attribute { name, value });
    }
    attributes
}

/// Content of a `string` node with the surrounding quotes stripped.
fn string_literal_content(node: Node, source: &str) -> String {
    let raw = node_text(node, source);
    if raw.len() >= 2 {
        raw[1..raw.len() - 1].to_string()
    } else {
        raw.to_string()
    }
}
