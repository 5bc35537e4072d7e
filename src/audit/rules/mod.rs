//! Built-in audit rules.
//!
//! One module per rule. Each exposes a `rule()` constructor returning the
//! rule's identity and check function; [`crate::audit::RuleRegistry`] wires
//! them together in catalog order.

pub mod anchor_without_href;
pub mod aria_validation;
pub mod button_label;
pub mod form_validation;
pub mod heading_structure;
pub mod iframe_without_title;
pub mod keyboard_accessibility;
pub mod landmark_elements;
pub mod missing_alt;
pub mod missing_label;
pub mod table_accessibility;
