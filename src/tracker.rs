//! Single-pointer state tracking between evdev frames.

use std::time::Instant;

use crate::pointer::{Point, PointerProvider, PointerSample, RELEASED_DURATION};

/// Accumulates raw axis and touch events into the per-tick sample the
/// recognizer consumes. One instance per watched device.
#[derive(Debug)]
pub struct PointerTracker {
    position: Point,
    position_down: Point,
    pressed_at: Option<Instant>,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            position: Point::default(),
            position_down: Point::default(),
            pressed_at: None,
        }
    }

    pub fn on_pos_x(&mut self, raw: i32) {
        self.position.x = raw as f32;
    }

    pub fn on_pos_y(&mut self, raw: i32) {
        self.position.y = raw as f32;
    }

    /// BTN_TOUCH transition. The press-down position is pinned on the
    /// down edge; repeated down events within a press are ignored.
    pub fn on_touch(&mut self, pressed: bool) {
        if pressed {
            if self.pressed_at.is_none() {
                self.pressed_at = Some(Instant::now());
                self.position_down = self.position;
            }
        } else {
            self.pressed_at = None;
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }
}

impl PointerProvider for PointerTracker {
    fn sample(&self) -> PointerSample {
        let duration_ms = match self.pressed_at {
            Some(since) => since.elapsed().as_secs_f32() * 1000.0,
            None => RELEASED_DURATION,
        };
        PointerSample {
            position_down: self.position_down,
            position: self.position,
            duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_tracker_reports_the_sentinel() {
        let t = PointerTracker::new();
        let s = t.sample();
        assert!(!s.is_pressed());
        assert_eq!(s.duration_ms, RELEASED_DURATION);
    }

    #[test]
    fn press_pins_the_down_position() {
        let mut t = PointerTracker::new();
        t.on_pos_x(100);
        t.on_pos_y(200);
        t.on_touch(true);
        t.on_pos_x(140);

        let s = t.sample();
        assert!(s.is_pressed());
        assert_eq!(s.position_down, Point::new(100.0, 200.0));
        assert_eq!(s.position, Point::new(140.0, 200.0));
    }

    #[test]
    fn repeated_down_events_do_not_restart_the_press() {
        let mut t = PointerTracker::new();
        t.on_pos_x(10);
        t.on_touch(true);
        t.on_pos_x(50);
        t.on_touch(true);

        assert_eq!(t.sample().position_down.x, 10.0);
    }

    #[test]
    fn release_returns_to_the_sentinel() {
        let mut t = PointerTracker::new();
        t.on_touch(true);
        assert!(t.is_pressed());
        t.on_touch(false);
        assert!(!t.is_pressed());
        assert!(t.sample().duration_ms < 0.0);
    }
}
