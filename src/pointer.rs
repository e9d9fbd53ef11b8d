//! Pointer sample model shared by live providers and recorded traces.

use serde::{Deserialize, Serialize};

/// Duration value a provider reports while the pointer is up.
///
/// The recognizer keys release detection off the sign of the duration,
/// so any negative value works; this is the canonical one.
pub const RELEASED_DURATION: f32 = -1.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One tick's worth of pointer state.
///
/// `position_down` is only meaningful while the pointer is pressed;
/// providers keep the last press location in it after release, and the
/// recognizer never reads it on a release tick except to stamp events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointerSample {
    pub position_down: Point,
    pub position: Point,
    /// Milliseconds since the press began, or negative when released.
    pub duration_ms: f32,
}

impl PointerSample {
    pub fn released() -> Self {
        Self {
            position_down: Point::default(),
            position: Point::default(),
            duration_ms: RELEASED_DURATION,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.duration_ms >= 0.0
    }
}

/// Source of pointer samples, polled once per tick by the caller.
pub trait PointerProvider {
    fn sample(&self) -> PointerSample;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn released_sample_is_not_pressed() {
        let s = PointerSample::released();
        assert!(!s.is_pressed());
        assert!(s.duration_ms < 0.0);
    }

    #[test]
    fn zero_duration_counts_as_pressed() {
        let s = PointerSample {
            position_down: Point::default(),
            position: Point::default(),
            duration_ms: 0.0,
        };
        assert!(s.is_pressed());
    }
}
