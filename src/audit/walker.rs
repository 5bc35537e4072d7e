//! Document-order tree traversal driving the rule registry.
//!
//! The walker visits every element exactly once, pre-order (parent before
//! children, children in source order), running every registered rule
//! against each element and collecting violations in visitation order. Two
//! runs over identical input therefore produce identical, diffable output.
//!
//! Failure semantics: rules are assumed total over well-formed trees. A
//! panicking rule predicate is a defect in that rule, and the panic
//! propagates and aborts the run rather than being masked here.

use crate::markup::{Child, Element};

use super::context::RuleContext;
use super::registry::RuleRegistry;
use super::result::{AuditResult, Violation};

/// Pre-order walker over element trees.
pub struct TreeWalker<'a> {
    registry: &'a RuleRegistry,
    source: &'a str,
}

impl<'a> TreeWalker<'a> {
    /// Create a walker for one run.
    pub fn new(registry: &'a RuleRegistry, source: &'a str) -> Self {
        Self { registry, source }
    }

    /// Walk the given roots in order, collecting violations.
    pub fn walk(&self, roots: &[Element]) -> Vec<Violation> {
        let mut violations = Vec::new();
        for root in roots {
            self.visit(root, &mut violations);
        }
        violations
    }

    fn visit(&self, element: &Element, out: &mut Vec<Violation>) {
        let ctx = RuleContext::new(element, self.source);
        for rule in self.registry.iter() {
            if let Some(violation) = (rule.check)(&ctx) {
                out.push(violation);
            }
        }

        for child in &element.children {
            match child {
                Child::Element(el) => self.visit(el, out),
                // Embedded containers are visited in place so document order
                // is preserved for elements nested in expressions/fragments.
                Child::Embedded(els) => {
                    for el in els {
                        self.visit(el, out);
                    }
                }
                Child::Text(_) => {}
            }
        }
    }
}

/// Run one full audit: walk the tree, aggregate violations, score.
pub fn audit(roots: &[Element], source: &str, registry: &RuleRegistry) -> AuditResult {
    let violations = TreeWalker::new(registry, source).walk(roots);
    tracing::debug!(
        total_checks = registry.len(),
        violations = violations.len(),
        "audit run complete"
    );
    AuditResult::new(registry.len(), violations)
}
