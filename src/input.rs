//! Pointer device discovery (evdev 0.13.2 compatible)

use evdev::{AbsoluteAxisCode, Device, EventType, KeyCode};

#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub path: String,
    pub name: String,
}

/// Scan /dev/input for devices that look like a single-pointer touch
/// surface: absolute X/Y axes plus a BTN_TOUCH key.
pub fn discover_pointer_devices() -> Vec<DeviceInfo> {
    let mut out = vec![];
    if let Ok(rd) = std::fs::read_dir("/dev/input") {
        for e in rd.flatten() {
            let p = e.path();
            if p.file_name()
                .and_then(|s| s.to_str())
                .map(|s| s.starts_with("event"))
                .unwrap_or(false)
            {
                if let Ok(dev) = Device::open(&p) {
                    let has_abs = dev.supported_events().contains(EventType::ABSOLUTE);
                    let axes = dev.supported_absolute_axes();
                    let has_xy = axes.map_or(false, |a| {
                        a.contains(AbsoluteAxisCode::ABS_X)
                            && a.contains(AbsoluteAxisCode::ABS_Y)
                    });
                    let has_touch = dev
                        .supported_keys()
                        .map_or(false, |k| k.contains(KeyCode::BTN_TOUCH));
                    if has_abs && has_xy && has_touch {
                        out.push(DeviceInfo {
                            path: p.display().to_string(),
                            name: dev.name().unwrap_or("unknown").to_string(),
                        });
                    }
                }
            }
        }
    }
    out
}
