//! Edge-triggered change detection.

use camwatch_detect::DeviceState;

/// What the detector currently believes about the target device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchState {
    #[default]
    Unobserved,
    ObservedOn,
    ObservedOff,
}

impl WatchState {
    fn observed(state: DeviceState) -> Self {
        match state {
            DeviceState::On => WatchState::ObservedOn,
            DeviceState::Off => WatchState::ObservedOff,
        }
    }
}

/// Turns a stream of `running` observations into ON/OFF transitions.
///
/// The first observation always emits. After that only changes do.
#[derive(Debug, Default)]
pub struct ChangeDetector {
    state: WatchState,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Feed one observation. Returns the new state if it is a transition.
    pub fn observe(&mut self, running: bool) -> Option<DeviceState> {
        let current = DeviceState::from_running(running);
        let next = WatchState::observed(current);

        if self.state == next {
            return None;
        }

        self.state = next;
        Some(current)
    }
}
