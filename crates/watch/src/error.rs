//! Error types for action execution.

use thiserror::Error;

/// Result type for action execution.
pub type ActionResult<T> = Result<T, ActionError>;

/// Errors from running an `--on-command` / `--off-command`.
///
/// None of these stop the watcher; they are logged and polling continues.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The shell could not be started.
    #[error("Error executing command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited with a failure code.
    #[error("Error executing command '{command}': exit status {code}")]
    NonZeroExit { command: String, code: i32 },

    /// The command was killed by a signal.
    #[error("Error executing command '{command}': terminated by signal")]
    Signaled { command: String },
}
