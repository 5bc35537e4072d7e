//! UXRay - static accessibility auditor for JSX/TSX component files.
//!
//! UXRay parses a component source file into a markup element tree, runs a
//! fixed battery of accessibility and semantic checks against every element,
//! and aggregates the findings into a score and a violation list.
//!
//! # Modules
//!
//! - [`audit`] - The rule engine: rules, registry, walker, results, formatters
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`markup`] - TSX/JSX parsing and the normalized element model
//! - [`ui`] - Terminal output abstraction
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
//! assert_eq!(result.violations.len(), 1);
//! assert_eq!(result.violations[0].name, "missing-alt");
//! ```
//!
//! For end-to-end file auditing, see the CLI integration tests.

pub mod audit;
pub mod cli;
pub mod error;
pub mod markup;
pub mod ui;

pub use error::{Result, UxrayError};
