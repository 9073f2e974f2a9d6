//! CLI failures and their exit codes.

use camwatch_detect::{DetectError, Selector};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Startup snapshot failed.
    #[error("Error listing devices: {0}")]
    Enumerate(#[from] DetectError),

    /// Target device not in the startup snapshot.
    #[error("{}", .selector.not_found_message())]
    NotFound { selector: Selector },
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::NotFound { .. } => 1,
            CliError::Enumerate(_) => 2,
        }
    }

    pub fn tip(&self) -> Option<&'static str> {
        match self {
            CliError::NotFound { selector } => Some(selector.not_found_tip()),
            CliError::Enumerate(_) => None,
        }
    }
}
