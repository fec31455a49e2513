pub mod validate;

use crate::Result;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<CommandResult>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Outcome of a command, as seen by the calling CI system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Zero errors (warnings permitted)
    Passed,
    /// One or more errors
    Failed,
}

impl CommandResult {
    /// Convert to process exit code
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandResult::Passed => 0,
            CommandResult::Failed => 1,
        }
    }
}
