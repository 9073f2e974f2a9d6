//! Shell actions run on state changes.
//!
//! Templates are expanded by plain string substitution and handed to
//! `sh -c`. Values are not escaped, so templates must come from a trusted
//! source (the user's own command line).

use crate::error::{ActionError, ActionResult};
use camwatch_detect::DeviceState;
use std::process::{Command, Stdio};
use tracing::debug;

pub const DEVICE_PLACEHOLDER: &str = "{device}";
pub const STATE_PLACEHOLDER: &str = "{state}";

/// Replace every `{device}` and `{state}` in `template`.
pub fn interpolate(template: &str, device: &str, state: DeviceState) -> String {
    template
        .replace(DEVICE_PLACEHOLDER, device)
        .replace(STATE_PLACEHOLDER, state.label())
}

/// What happened when an action was due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// No template configured for this state.
    Skipped,

    /// The command ran and exited successfully.
    Completed { command: String },
}

/// Command templates for ON and OFF transitions.
#[derive(Debug, Clone, Default)]
pub struct ActionExecutor {
    on_command: Option<String>,
    off_command: Option<String>,
}

impl ActionExecutor {
    pub fn new(on_command: Option<String>, off_command: Option<String>) -> Self {
        Self {
            on_command: on_command.filter(|c| !c.is_empty()),
            off_command: off_command.filter(|c| !c.is_empty()),
        }
    }

    pub fn template_for(&self, state: DeviceState) -> Option<&str> {
        match state {
            DeviceState::On => self.on_command.as_deref(),
            DeviceState::Off => self.off_command.as_deref(),
        }
    }

    /// Run the template for `state`, blocking until the command exits.
    pub fn run(&self, device: &str, state: DeviceState) -> ActionResult<ActionOutcome> {
        let Some(template) = self.template_for(state) else {
            return Ok(ActionOutcome::Skipped);
        };

        let command = interpolate(template, device, state);
        debug!(%command, "running action");

        let status = Command::new("sh")
            .arg("-c")
            .arg(&command)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| ActionError::Spawn {
                command: command.clone(),
                source,
            })?;

        if status.success() {
            return Ok(ActionOutcome::Completed { command });
        }

        match status.code() {
            Some(code) => Err(ActionError::NonZeroExit { command, code }),
            None => Err(ActionError::Signaled { command }),
        }
    }
}
