//! Device snapshot types.

/// One media device as reported by the host at a single point in time.
///
/// Snapshots are rebuilt on every poll. Names are not unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// Opaque handle assigned by the host API.
    pub id: u32,

    /// Localized device name.
    pub name: String,

    /// Whether any process currently has the device running.
    pub running: bool,

    /// Whether the device exposes input streams (cameras do, most audio devices don't).
    pub has_video: bool,
}

impl Device {
    pub fn state(&self) -> DeviceState {
        DeviceState::from_running(self.running)
    }
}

/// In-use state of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceState {
    On,
    Off,
}

impl DeviceState {
    pub fn from_running(running: bool) -> Self {
        if running {
            DeviceState::On
        } else {
            DeviceState::Off
        }
    }

    /// Text used in output and in the `{state}` placeholder.
    pub fn label(&self) -> &'static str {
        match self {
            DeviceState::On => "ON",
            DeviceState::Off => "OFF",
        }
    }
}

impl std::fmt::Display for DeviceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
