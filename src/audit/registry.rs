//! Rule registry for managing audit rules.
//!
//! The [`RuleRegistry`] stores the rules wired into the engine for one run.
//! It is an ordered list, not a map: registration order fixes the total
//! check count and keeps iteration reproducible run to run, which the
//! engine's deterministic-output contract depends on. Once constructed the
//! registry is read-only and may be shared across concurrent runs.

use super::rule::Rule;
use super::rules;

/// Ordered registry of audit rules.
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules, in catalog order.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(rules::missing_label::rule());
        registry.register(rules::missing_alt::rule());
        registry.register(rules::button_label::rule());
        registry.register(rules::anchor_without_href::rule());
        registry.register(rules::iframe_without_title::rule());
        registry.register(rules::heading_structure::rule());
        registry.register(rules::landmark_elements::rule());
        registry.register(rules::form_validation::rule());
        registry.register(rules::aria_validation::rule());
        registry.register(rules::table_accessibility::rule());
        registry.register(rules::keyboard_accessibility::rule());
        registry
    }

    /// Register a rule at the end of the list.
    pub fn register(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Get a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Remove a rule by name. Returns whether a rule was removed, so callers
    /// can surface unknown names.
    pub fn disable(&mut self, name: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|r| r.name != name);
        self.rules.len() != before
    }

    /// Iterate over rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of registered rules. This is the run's `total_checks`.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
