//! Polling watcher - enumerate, select, diff, act, sleep.

use crate::action::ActionExecutor;
use crate::state::{ChangeDetector, WatchState};
use camwatch_detect::{Device, DeviceEnumerator, DeviceState, Selector};
use std::time::Duration;

/// Default polling interval for `--watch`.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// A transition reported by the watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChange {
    /// Name of the device as seen in the snapshot that produced the change.
    pub device: String,
    pub state: DeviceState,
}

/// `<name>  [<ON|OFF>]`, the line printed for every transition.
impl std::fmt::Display for StateChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}  [{}]", self.device, self.state)
    }
}

/// Result of a single poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Changed(StateChange),
    Unchanged,
    /// Target not in this snapshot; last-known state kept.
    DeviceMissing,
    /// Snapshot could not be taken; last-known state kept.
    EnumerationFailed,
}

/// Single-threaded camera watcher.
///
/// Owns the last-known state, so separate watchers never share anything.
/// Actions run synchronously: a slow command delays the next poll.
pub struct Watcher<P> {
    provider: P,
    selector: Selector,
    actions: ActionExecutor,
    detector: ChangeDetector,
    interval: Duration,
}

impl<P: DeviceEnumerator> Watcher<P> {
    pub fn new(provider: P, selector: Selector, actions: ActionExecutor, interval: Duration) -> Self {
        Self {
            provider,
            selector,
            actions,
            detector: ChangeDetector::new(),
            interval,
        }
    }

    pub fn state(&self) -> WatchState {
        self.detector.state()
    }

    /// Take one snapshot and act on it.
    pub fn poll_once(&mut self) -> PollOutcome {
        match self.provider.enumerate() {
            Ok(devices) => self.observe(&devices),
            Err(e) => {
                tracing::warn!(error = %e, "Error refreshing devices");
                PollOutcome::EnumerationFailed
            }
        }
    }

    /// Act on a snapshot taken elsewhere (e.g. the startup snapshot).
    pub fn observe(&mut self, devices: &[Device]) -> PollOutcome {
        let Some(device) = self.selector.find(devices) else {
            tracing::warn!(selector = %self.selector, "Device disappeared");
            return PollOutcome::DeviceMissing;
        };

        let Some(state) = self.detector.observe(device.running) else {
            return PollOutcome::Unchanged;
        };

        tracing::debug!(device = %device.name, %state, "state changed");

        if let Err(e) = self.actions.run(&device.name, state) {
            tracing::warn!(error = %e, "action failed");
        }

        PollOutcome::Changed(StateChange {
            device: device.name.clone(),
            state,
        })
    }

    /// Observe `initial`, then poll forever, calling `on_change` after each
    /// transition's action ran.
    pub fn run<F>(mut self, initial: &[Device], mut on_change: F) -> !
    where
        F: FnMut(&StateChange),
    {
        tracing::info!(selector = %self.selector, interval = ?self.interval, "watcher started");

        let mut outcome = self.observe(initial);
        loop {
            if let PollOutcome::Changed(change) = outcome {
                on_change(&change);
            }
            std::thread::sleep(self.interval);
            outcome = self.poll_once();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camwatch_detect::{DetectError, DetectResult, Device, NullProvider};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays canned snapshots, one per `enumerate` call.
    struct ScriptedProvider {
        snapshots: Mutex<VecDeque<DetectResult<Vec<Device>>>>,
    }

    impl ScriptedProvider {
        fn new(snapshots: Vec<DetectResult<Vec<Device>>>) -> Self {
            Self {
                snapshots: Mutex::new(snapshots.into()),
            }
        }
    }

    impl DeviceEnumerator for ScriptedProvider {
        fn enumerate(&self) -> DetectResult<Vec<Device>> {
            self.snapshots
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn camera(running: bool) -> Vec<Device> {
        vec![Device {
            id: 7,
            name: "Studio Display Camera".into(),
            running,
            has_video: true,
        }]
    }

    fn watcher(snapshots: Vec<DetectResult<Vec<Device>>>) -> Watcher<ScriptedProvider> {
        Watcher::new(
            ScriptedProvider::new(snapshots),
            Selector::Default,
            ActionExecutor::default(),
            Duration::from_millis(1),
        )
    }

    #[test]
    fn test_missing_device_keeps_state() {
        let mut watcher = watcher(vec![Ok(camera(true)), Ok(Vec::new()), Ok(camera(true))]);

        assert!(matches!(watcher.poll_once(), PollOutcome::Changed(_)));
        assert_eq!(watcher.poll_once(), PollOutcome::DeviceMissing);
        assert_eq!(watcher.state(), WatchState::ObservedOn);
        assert_eq!(watcher.poll_once(), PollOutcome::Unchanged);
    }

    #[test]
    fn test_enumeration_failure_keeps_state() {
        let mut watcher = watcher(vec![
            Ok(camera(false)),
            Err(DetectError::Enumerate { status: -1 }),
            Ok(camera(true)),
        ]);

        assert!(matches!(watcher.poll_once(), PollOutcome::Changed(_)));
        assert_eq!(watcher.poll_once(), PollOutcome::EnumerationFailed);
        assert_eq!(watcher.state(), WatchState::ObservedOff);
        assert_eq!(
            watcher.poll_once(),
            PollOutcome::Changed(StateChange {
                device: "Studio Display Camera".into(),
                state: DeviceState::On,
            })
        );
    }

    #[test]
    fn test_missing_before_first_observation() {
        let mut watcher = Watcher::new(
            NullProvider,
            Selector::Name("anything".into()),
            ActionExecutor::default(),
            DEFAULT_POLL_INTERVAL,
        );

        assert_eq!(watcher.poll_once(), PollOutcome::DeviceMissing);
        assert_eq!(watcher.state(), WatchState::Unobserved);
    }

    #[test]
    fn test_startup_snapshot_counts_as_first_observation() {
        let mut watcher = watcher(vec![Ok(camera(false)), Ok(camera(true))]);

        assert_eq!(
            watcher.observe(&camera(false)),
            PollOutcome::Changed(StateChange {
                device: "Studio Display Camera".into(),
                state: DeviceState::Off,
            })
        );
        assert_eq!(watcher.poll_once(), PollOutcome::Unchanged);
        assert!(matches!(watcher.poll_once(), PollOutcome::Changed(_)));
    }

    #[test]
    fn test_state_change_line() {
        let change = StateChange {
            device: "Studio Display Camera".into(),
            state: DeviceState::On,
        };
        assert_eq!(change.to_string(), "Studio Display Camera  [ON]");

        let change = StateChange {
            device: "X".into(),
            state: DeviceState::Off,
        };
        assert_eq!(change.to_string(), "X  [OFF]");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_action_still_reports_change() {
        let mut watcher = Watcher::new(
            ScriptedProvider::new(vec![Ok(camera(true))]),
            Selector::Default,
            ActionExecutor::new(Some("exit 1".into()), None),
            DEFAULT_POLL_INTERVAL,
        );

        assert!(matches!(
            watcher.poll_once(),
            PollOutcome::Changed(StateChange {
                state: DeviceState::On,
                ..
            })
        ));
    }
}
