//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing parsed arguments

use anyhow::anyhow;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches parsed CLI arguments to their command implementation.
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if cli.list_rules {
            let cmd = super::rules::RulesCommand::new();
            return cmd.execute(ui);
        }

        match &cli.file {
            Some(file) => {
                let cmd = super::audit::AuditCommand::new(file, cli.audit.clone());
                cmd.execute(ui)
            }
            // clap enforces the positional unless --list-rules was given.
            None => Err(anyhow!("missing <FILE> argument").into()),
        }
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatch_routes_list_rules() {
        let cli = Cli::parse_from(["uxray", "--list-rules"]);
        let mut ui = MockUI::new();

        let result = CommandDispatcher::new().dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.output_contains("missing-alt"));
    }

    #[test]
    fn dispatch_routes_audit_to_missing_file_error() {
        let cli = Cli::parse_from(["uxray", "/nonexistent/App.tsx"]);
        let mut ui = MockUI::new();

        let err = CommandDispatcher::new().dispatch(&cli, &mut ui).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/App.tsx"));
    }
}
