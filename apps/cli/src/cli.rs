use std::time::Duration;

use camwatch_detect::Selector;
use clap::Parser;

use crate::duration::parse_duration;

#[derive(Debug, Parser, Clone)]
#[command(name = "studio-cam-detector")]
#[command(about = "Report whether a camera is in use, or watch it for ON/OFF changes")]
pub struct Cli {
    /// Substring of the camera name to match (case-insensitive). If empty, defaults to Studio Display camera.
    #[arg(long)]
    pub name: Option<String>,

    /// Alias for --name. Substring of the camera name to match (case-insensitive).
    #[arg(long)]
    pub camera: Option<String>,

    /// List all CMIO devices and their in-use status, then exit.
    #[arg(long)]
    pub list: bool,

    /// When listing, show only video devices.
    #[arg(long)]
    pub video_only: bool,

    /// Watch for status changes and print updates.
    #[arg(long)]
    pub watch: bool,

    /// Polling interval when using --watch (e.g. 500ms, 1s, 1m30s).
    #[arg(long, default_value = "1s", value_parser = parse_duration)]
    pub interval: Duration,

    /// When not watching, print only ON or OFF without extra text.
    #[arg(long)]
    pub quiet: bool,

    /// Command to execute when camera turns ON (only used with --watch). Use {device} and {state} as placeholders.
    #[arg(long)]
    pub on_command: Option<String>,

    /// Command to execute when camera turns OFF (only used with --watch). Use {device} and {state} as placeholders.
    #[arg(long)]
    pub off_command: Option<String>,
}

impl Cli {
    pub fn selector(&self) -> Selector {
        Selector::from_flags(self.name.as_deref(), self.camera.as_deref())
    }

    pub fn has_actions(&self) -> bool {
        [&self.on_command, &self.off_command]
            .iter()
            .any(|c| c.as_deref().is_some_and(|c| !c.is_empty()))
    }
}
