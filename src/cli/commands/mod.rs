//! Command implementations.

pub mod audit;
pub mod dispatcher;
pub mod rules;

pub use audit::AuditCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use rules::RulesCommand;
