//! Platform-specific implementations.

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub use macos::CoreMediaIoProvider;

// Re-export the appropriate provider for the current platform
#[cfg(target_os = "macos")]
pub type PlatformProvider = CoreMediaIoProvider;

#[cfg(not(target_os = "macos"))]
pub type PlatformProvider = UnsupportedProvider;

/// Stand-in for platforms without a media-device binding.
#[cfg(not(target_os = "macos"))]
#[derive(Debug, Default)]
pub struct UnsupportedProvider;

#[cfg(not(target_os = "macos"))]
impl UnsupportedProvider {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(target_os = "macos"))]
impl crate::provider::DeviceEnumerator for UnsupportedProvider {
    fn enumerate(&self) -> crate::error::DetectResult<Vec<crate::device::Device>> {
        Err(crate::error::DetectError::Unsupported)
    }
}
