//! End-to-end watcher scenarios.
//!
//! Drives the watcher with scripted snapshots and records what the actions
//! did through a temp file.

use camwatch_detect::{DetectResult, Device, DeviceEnumerator, DeviceState, Selector};
use camwatch_watch::{ActionExecutor, PollOutcome, StateChange, Watcher, WatchState};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

struct ScriptedProvider {
    snapshots: Mutex<VecDeque<DetectResult<Vec<Device>>>>,
}

impl ScriptedProvider {
    fn from_running(sequence: &[bool]) -> Self {
        let snapshots = sequence
            .iter()
            .map(|&running| Ok(vec![microphone(), device_x(running)]))
            .collect();
        Self {
            snapshots: Mutex::new(snapshots),
        }
    }
}

impl DeviceEnumerator for ScriptedProvider {
    fn enumerate(&self) -> DetectResult<Vec<Device>> {
        self.snapshots
            .lock()
            .unwrap()
            .pop_front()
            .expect("scenario ran out of snapshots")
    }
}

fn microphone() -> Device {
    Device {
        id: 1,
        name: "Built-in Microphone".into(),
        running: true,
        has_video: false,
    }
}

fn device_x(running: bool) -> Device {
    Device {
        id: 2,
        name: "X".into(),
        running,
        has_video: true,
    }
}

fn poll_all<P: DeviceEnumerator>(watcher: &mut Watcher<P>, polls: usize) -> Vec<StateChange> {
    (0..polls)
        .filter_map(|_| match watcher.poll_once() {
            PollOutcome::Changed(change) => Some(change),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Emission Tests
// =============================================================================

#[test]
fn test_off_off_on_on_off_emits_three_times() {
    let sequence = [false, false, true, true, false];
    let mut watcher = Watcher::new(
        ScriptedProvider::from_running(&sequence),
        Selector::Name("x".into()),
        ActionExecutor::default(),
        Duration::from_millis(1),
    );

    let changes = poll_all(&mut watcher, sequence.len());

    let states: Vec<DeviceState> = changes.iter().map(|c| c.state).collect();
    assert_eq!(
        states,
        vec![DeviceState::Off, DeviceState::On, DeviceState::Off]
    );
    assert!(changes.iter().all(|c| c.device == "X"));
    assert_eq!(watcher.state(), WatchState::ObservedOff);
}

#[test]
fn test_steady_state_emits_once() {
    let sequence = [true; 6];
    let mut watcher = Watcher::new(
        ScriptedProvider::from_running(&sequence),
        Selector::Name("X".into()),
        ActionExecutor::default(),
        Duration::from_millis(1),
    );

    let changes = poll_all(&mut watcher, sequence.len());
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].state, DeviceState::On);
}

// =============================================================================
// Action Tests
// =============================================================================

#[cfg(unix)]
mod actions {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_actions_run_once_per_transition() {
        let dir = tempdir().unwrap();
        let log = dir.path().join("actions.log");

        let on = format!("echo '{{device}} {{state}}' >> '{}'", log.display());
        let off = format!("echo '{{device}} {{state}}' >> '{}'", log.display());

        let sequence = [false, false, true, true, false];
        let mut watcher = Watcher::new(
            ScriptedProvider::from_running(&sequence),
            Selector::Name("x".into()),
            ActionExecutor::new(Some(on), Some(off)),
            Duration::from_millis(1),
        );

        poll_all(&mut watcher, sequence.len());

        let contents = std::fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, vec!["X OFF", "X ON", "X OFF"]);
    }

    #[test]
    fn test_only_configured_state_runs() {
        let dir = tempdir().unwrap();
        let log = dir.path().join("on.log");

        let on = format!("echo {{state}} >> '{}'", log.display());

        let sequence = [true, false, true];
        let mut watcher = Watcher::new(
            ScriptedProvider::from_running(&sequence),
            Selector::Name("x".into()),
            ActionExecutor::new(Some(on), None),
            Duration::from_millis(1),
        );

        let changes = poll_all(&mut watcher, sequence.len());
        assert_eq!(changes.len(), 3);

        let contents = std::fs::read_to_string(&log).unwrap();
        assert_eq!(contents.lines().collect::<Vec<_>>(), vec!["ON", "ON"]);
    }

    #[test]
    fn test_failing_action_does_not_stop_polling() {
        let sequence = [false, true, false];
        let mut watcher = Watcher::new(
            ScriptedProvider::from_running(&sequence),
            Selector::Name("x".into()),
            ActionExecutor::new(Some("exit 7".into()), Some("/nonexistent/binary".into())),
            Duration::from_millis(1),
        );

        let changes = poll_all(&mut watcher, sequence.len());
        assert_eq!(changes.len(), 3);
    }
}
