//! Live watch loop: evdev events -> tracker -> recognizer -> log.

use anyhow::{Result, anyhow};
use log::info;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::flag;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::{thread, time::Duration};

use evdev::{AbsoluteAxisCode, Device, EventType, KeyCode};

use crate::config::Profile;
use crate::gestures::GestureRecognizer;
use crate::input;
use crate::tracker::PointerTracker;

/// Open the requested device, or the first discovered pointer device.
fn open_device(device_path: Option<String>) -> Result<(String, Device)> {
    let path = match device_path {
        Some(p) => p,
        None => {
            input::discover_pointer_devices()
                .into_iter()
                .next()
                .ok_or_else(|| anyhow!("no pointer devices detected; try --device <path>"))?
                .path
        }
    };
    let dev = Device::open(&path).map_err(|e| anyhow!("failed to open {path}: {e}"))?;
    Ok((path, dev))
}

/// Drive the recognizer from a live device until SIGINT/SIGTERM.
///
/// Single-threaded: events are drained nonblocking, the recognizer is
/// ticked once per `tick_ms`, and gesture handlers run synchronously
/// inside the tick.
pub fn watch(device_path: Option<String>, profile: &Profile) -> Result<()> {
    let (path, mut dev) = open_device(device_path)?;
    dev.set_nonblocking(true)?;
    info!(
        "watching {} ({})",
        path,
        dev.name().unwrap_or("unknown")
    );

    let term = Arc::new(AtomicBool::new(false));
    flag::register(SIGINT, term.clone())?;
    flag::register(SIGTERM, term.clone())?;

    let mut tracker = PointerTracker::new();
    let mut rec = GestureRecognizer::new(profile.thresholds.clone());

    rec.on_swipe.connect(|e| {
        info!(
            "swipe {} from ({:.0},{:.0}) to ({:.0},{:.0})",
            e.direction.as_str(),
            e.position_down.x,
            e.position_down.y,
            e.position.x,
            e.position.y
        );
    });
    rec.on_tap.connect(|e| {
        info!("tap at ({:.0},{:.0})", e.position_down.x, e.position_down.y);
    });
    rec.on_hold.connect(|e| {
        info!("hold at ({:.0},{:.0})", e.position_down.x, e.position_down.y);
    });

    let tick = Duration::from_millis(profile.thresholds.tick_ms);
    while !term.load(Ordering::Relaxed) {
        if let Ok(events) = dev.fetch_events() {
            for ev in events {
                if ev.event_type() == EventType::ABSOLUTE {
                    match ev.code() {
                        c if c == AbsoluteAxisCode::ABS_X.0 => tracker.on_pos_x(ev.value()),
                        c if c == AbsoluteAxisCode::ABS_Y.0 => tracker.on_pos_y(ev.value()),
                        _ => {}
                    }
                } else if ev.event_type() == EventType::KEY
                    && ev.code() == KeyCode::BTN_TOUCH.0
                {
                    tracker.on_touch(ev.value() != 0);
                }
            }
        }

        rec.update_from(&tracker);
        thread::sleep(tick);
    }

    info!("watch loop stopped");
    Ok(())
}
