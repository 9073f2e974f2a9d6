//! Camera selection.
//!
//! Pure domain logic - no I/O, no platform dependencies.

use crate::device::Device;

/// Lowercase marker that identifies the default camera.
pub const DEFAULT_CAMERA_MARKER: &str = "studio display";

/// Which device in a snapshot the user cares about.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// First video device whose name contains [`DEFAULT_CAMERA_MARKER`].
    #[default]
    Default,

    /// First device whose name contains this substring (case-insensitive).
    Name(String),
}

impl Selector {
    /// Build a selector from the `--name` / `--camera` pair.
    ///
    /// `--name` wins when both are given and non-empty.
    pub fn from_flags(name: Option<&str>, camera: Option<&str>) -> Self {
        let pick = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);

        match pick(name).or_else(|| pick(camera)) {
            Some(needle) => Selector::Name(needle),
            None => Selector::Default,
        }
    }

    /// Return the first matching device in enumeration order.
    pub fn find<'a>(&self, devices: &'a [Device]) -> Option<&'a Device> {
        match self {
            Selector::Default => devices
                .iter()
                .find(|d| d.has_video && d.name.to_lowercase().contains(DEFAULT_CAMERA_MARKER)),
            Selector::Name(needle) => {
                let needle = needle.to_lowercase();
                devices
                    .iter()
                    .find(|d| d.name.to_lowercase().contains(&needle))
            }
        }
    }

    /// Message printed when [`Selector::find`] comes back empty.
    pub fn not_found_message(&self) -> String {
        match self {
            Selector::Default => "No Studio Display camera found.".to_string(),
            Selector::Name(needle) => {
                format!("No device found matching name substring: {:?}", needle)
            }
        }
    }

    /// Follow-up hint for the not-found message.
    pub fn not_found_tip(&self) -> &'static str {
        match self {
            Selector::Default => "Tip: run with --list --video-only to see available video devices, or use --name/--camera to specify a different device.",
            Selector::Name(_) => "Tip: run with --list to see available devices.",
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Default => write!(f, "default Studio Display camera"),
            Selector::Name(needle) => write!(f, "name contains {:?}", needle),
        }
    }
}
