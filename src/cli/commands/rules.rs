//! Rule listing command implementation.
//!
//! `uxray --list-rules` prints the registered rule catalog: name, category,
//! severity, and description, in registration order.

use crate::audit::RuleRegistry;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The rule listing command implementation.
pub struct RulesCommand;

impl RulesCommand {
    /// Create a new rules command.
    pub fn new() -> Self {
        Self
    }
}

impl Default for RulesCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = RuleRegistry::with_builtins();

        ui.show_header(&format!("Registered rules ({})", registry.len()));
        for rule in registry.iter() {
            ui.message(&format!(
                "{:<24} {:<9} {:<6} {}",
                rule.name,
                rule.category.to_string(),
                rule.severity.to_string(),
                rule.description
            ));
        }

        Ok(CommandResult::success())
    }
}
