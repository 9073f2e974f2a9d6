//! Rendering for `--list`.

use crate::device::Device;

pub const NO_DEVICES: &str = "No CMIO devices found.";
pub const NO_VIDEO_DEVICES: &str = "No video devices found.";

/// `- <name>[ [VIDEO]]  [<ON|OFF>]`
pub fn format_device_line(device: &Device) -> String {
    let video = if device.has_video { " [VIDEO]" } else { "" };
    format!("- {}{}  [{}]", device.name, video, device.state())
}

/// One output line per device, or a single explanatory line when nothing matches.
pub fn render_device_list(devices: &[Device], video_only: bool) -> Vec<String> {
    if devices.is_empty() {
        return vec![NO_DEVICES.to_string()];
    }

    let lines: Vec<String> = devices
        .iter()
        .filter(|d| !video_only || d.has_video)
        .map(format_device_line)
        .collect();

    if lines.is_empty() {
        return vec![NO_VIDEO_DEVICES.to_string()];
    }

    lines
}
