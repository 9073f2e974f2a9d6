//! Error types for device enumeration.

use thiserror::Error;

/// Result type for detection operations.
pub type DetectResult<T> = Result<T, DetectError>;

/// Errors that can occur while taking a device snapshot.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The host API refused to hand out the device list.
    #[error("device list query failed with status {status}")]
    Enumerate { status: i32 },

    /// No media-device binding exists for this platform.
    #[error("device enumeration is not supported on this platform")]
    Unsupported,
}
