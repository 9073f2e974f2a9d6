//! One-shot status lines.

use camwatch_detect::Device;

/// `<name> is <ON|OFF>`, or just `ON` / `OFF` with `--quiet`.
pub fn status_line(device: &Device, quiet: bool) -> String {
    if quiet {
        device.state().to_string()
    } else {
        format!("{} is {}", device.name, device.state())
    }
}
