//! The audit engine: rules, registry, walker, results.
//!
//! # Overview
//!
//! The engine is a fixed battery of accessibility and semantic checks run
//! against a parsed element tree:
//!
//! - **Rules** - named, categorized, pure checks ([`Rule`])
//! - **Registry** - the ordered rule list wired in at construction
//!   ([`RuleRegistry`])
//! - **Walker** - pre-order traversal driving every rule over every element
//!   ([`TreeWalker`], [`audit`])
//! - **Results** - violations in visitation order plus the coarse score
//!   ([`AuditResult`])
//!
//! # Example
//!
//! ```
//! use uxray::audit::{audit, RuleRegistry};
//! use uxray::markup::{Attribute, Element};
//!
//! let registry = RuleRegistry::with_builtins();
//! let roots = [Element::new("img").with_attribute(Attribute::literal("src", "x.png"))];
//!
//! let result = audit(&roots, "", &registry);
//! assert_eq!(result.violations[0].name, "missing-alt");
//! assert_eq!(result.total_checks, registry.len());
//! ```

pub mod context;
pub mod output;
pub mod registry;
pub mod result;
pub mod rule;
pub mod rules;
pub mod walker;

pub use context::RuleContext;
pub use output::{
    HumanFormatter, JsonFormatter, MarkdownFormatter, ReportFormat, ReportFormatter,
};
pub use registry::RuleRegistry;
pub use result::{AuditResult, Violation};
pub use rule::{Rule, RuleCategory, Severity};
pub use walker::{audit, TreeWalker};
