//! Provider trait for device snapshots.
//!
//! Abstracts the host media API so selection and change detection stay
//! pure and testable.

use crate::device::Device;
use crate::error::DetectResult;

/// Source of device snapshots.
pub trait DeviceEnumerator: Send + Sync {
    /// Take a fresh snapshot of all media devices, in host enumeration order.
    fn enumerate(&self) -> DetectResult<Vec<Device>>;
}

/// Null implementation for testing.
pub struct NullProvider;

impl DeviceEnumerator for NullProvider {
    fn enumerate(&self) -> DetectResult<Vec<Device>> {
        Ok(Vec::new())
    }
}
