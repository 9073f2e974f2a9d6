//! Media device detection for studio-cam-detector.
//!
//! This crate turns the host's media-device registry into plain [`Device`]
//! snapshots and picks the camera of interest out of them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                             │
//! │  device.rs   - Device snapshot and ON/OFF state (pure)      │
//! │  select.rs   - Name / default camera selection (pure)       │
//! │  list.rs     - `--list` rendering (pure)                    │
//! │  provider.rs - DeviceEnumerator trait                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Infrastructure Layer                        │
//! │  platform/macos.rs - CoreMediaIO binding                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use camwatch_detect::{platform::PlatformProvider, DeviceEnumerator, Selector};
//!
//! let provider = PlatformProvider::new();
//! let devices = provider.enumerate()?;
//! if let Some(camera) = Selector::Default.find(&devices) {
//!     println!("{} is {}", camera.name, camera.state());
//! }
//! ```

mod device;
mod error;
mod list;
mod provider;
mod select;

pub mod platform;

pub use device::{Device, DeviceState};
pub use error::{DetectError, DetectResult};
pub use list::{format_device_line, render_device_list, NO_DEVICES, NO_VIDEO_DEVICES};
pub use provider::{DeviceEnumerator, NullProvider};
pub use select::{Selector, DEFAULT_CAMERA_MARKER};
