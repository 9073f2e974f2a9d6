//! Camera watching for studio-cam-detector.
//!
//! Runs the snapshot → select → diff → act loop on top of
//! [`camwatch_detect`]:
//!
//! - `state.rs`   - ChangeDetector, the edge-triggered state machine (pure)
//! - `action.rs`  - `--on-command` / `--off-command` execution
//! - `watcher.rs` - Polling loop tying the two to a device enumerator
//!
//! # Example
//!
//! ```ignore
//! use camwatch_detect::{platform::PlatformProvider, DeviceEnumerator, Selector};
//! use camwatch_watch::{ActionExecutor, Watcher, DEFAULT_POLL_INTERVAL};
//!
//! let watcher = Watcher::new(
//!     PlatformProvider::new(),
//!     Selector::Default,
//!     ActionExecutor::new(Some("say camera on".into()), None),
//!     DEFAULT_POLL_INTERVAL,
//! );
//! let initial = PlatformProvider::new().enumerate()?;
//! watcher.run(&initial, |change| println!("{change}"));
//! ```

mod action;
mod error;
mod state;
mod watcher;

pub use action::{interpolate, ActionExecutor, ActionOutcome, DEVICE_PLACEHOLDER, STATE_PLACEHOLDER};
pub use error::{ActionError, ActionResult};
pub use state::{ChangeDetector, WatchState};
pub use watcher::{PollOutcome, StateChange, Watcher, DEFAULT_POLL_INTERVAL};
