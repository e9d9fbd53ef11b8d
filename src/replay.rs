//! Offline replay of recorded pointer traces.
//!
//! A trace is a JSON array of [`PointerSample`] values, one per tick,
//! in the order a live provider would have produced them.

use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use crate::config::Thresholds;
use crate::error::{Error, Result};
use crate::gestures::{GestureRecognizer, SwipeDirection};
use crate::pointer::{Point, PointerSample};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecognizedGesture {
    Swipe {
        position_down: Point,
        position: Point,
        direction: SwipeDirection,
    },
    Tap {
        position_down: Point,
    },
    Hold {
        position_down: Point,
    },
}

impl fmt::Display for RecognizedGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swipe {
                position_down,
                position,
                direction,
            } => write!(
                f,
                "swipe {} from ({:.0},{:.0}) to ({:.0},{:.0})",
                direction.as_str(),
                position_down.x,
                position_down.y,
                position.x,
                position.y
            ),
            Self::Tap { position_down } => {
                write!(f, "tap at ({:.0},{:.0})", position_down.x, position_down.y)
            }
            Self::Hold { position_down } => {
                write!(f, "hold at ({:.0},{:.0})", position_down.x, position_down.y)
            }
        }
    }
}

pub fn load_trace(path: &Path) -> Result<Vec<PointerSample>> {
    let txt = fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&txt).map_err(|e| Error::ParseTrace {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Feed every sample through a fresh recognizer and return the gestures
/// it emitted, in dispatch order.
pub fn run_trace(samples: &[PointerSample], th: Thresholds) -> Vec<RecognizedGesture> {
    let mut rec = GestureRecognizer::new(th);
    let out: Rc<RefCell<Vec<RecognizedGesture>>> = Rc::new(RefCell::new(Vec::new()));

    let sink = out.clone();
    rec.on_swipe.connect(move |e| {
        sink.borrow_mut().push(RecognizedGesture::Swipe {
            position_down: e.position_down,
            position: e.position,
            direction: e.direction,
        });
    });
    let sink = out.clone();
    rec.on_tap.connect(move |e| {
        sink.borrow_mut().push(RecognizedGesture::Tap {
            position_down: e.position_down,
        });
    });
    let sink = out.clone();
    rec.on_hold.connect(move |e| {
        sink.borrow_mut().push(RecognizedGesture::Hold {
            position_down: e.position_down,
        });
    });

    for s in samples {
        rec.update(s);
    }

    out.take()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(txt: &str) -> Vec<PointerSample> {
        serde_json::from_str(txt).unwrap()
    }

    #[test]
    fn trace_json_round_trips_through_the_recognizer() {
        let txt = r#"[
            {"position_down": {"x": 0.0, "y": 0.0}, "position": {"x": 1.0, "y": 0.0}, "duration_ms": 30.0},
            {"position_down": {"x": 0.0, "y": 0.0}, "position": {"x": 1.0, "y": 0.0}, "duration_ms": -1.0}
        ]"#;
        let samples = parse(txt);
        assert_eq!(samples.len(), 2);

        let gestures = run_trace(&samples, Thresholds::default());
        assert_eq!(
            gestures,
            vec![RecognizedGesture::Tap {
                position_down: Point::new(0.0, 0.0)
            }]
        );
    }

    #[test]
    fn multi_press_trace_keeps_dispatch_order() {
        let mk = |down: (f32, f32), at: (f32, f32), d: f32| PointerSample {
            position_down: Point::new(down.0, down.1),
            position: Point::new(at.0, at.1),
            duration_ms: d,
        };
        let samples = vec![
            // press 1: fast swipe left
            mk((100.0, 0.0), (40.0, 0.0), 20.0),
            mk((100.0, 0.0), (40.0, 0.0), -1.0),
            // press 2: hold
            mk((10.0, 10.0), (10.0, 10.0), 50.0),
            mk((10.0, 10.0), (10.0, 10.0), 250.0),
            mk((10.0, 10.0), (10.0, 10.0), -1.0),
            // press 3: tap
            mk((5.0, 5.0), (5.0, 5.0), 40.0),
            mk((5.0, 5.0), (5.0, 5.0), -1.0),
        ];

        let gestures = run_trace(&samples, Thresholds::default());
        assert_eq!(
            gestures,
            vec![
                RecognizedGesture::Swipe {
                    position_down: Point::new(100.0, 0.0),
                    position: Point::new(40.0, 0.0),
                    direction: SwipeDirection::Left,
                },
                RecognizedGesture::Hold {
                    position_down: Point::new(10.0, 10.0)
                },
                RecognizedGesture::Tap {
                    position_down: Point::new(5.0, 5.0)
                },
            ]
        );
    }

    #[test]
    fn empty_trace_recognizes_nothing() {
        assert!(run_trace(&[], Thresholds::default()).is_empty());
    }

    #[test]
    fn display_formats_are_stable() {
        let g = RecognizedGesture::Swipe {
            position_down: Point::new(0.0, 0.0),
            position: Point::new(30.0, 0.0),
            direction: SwipeDirection::Right,
        };
        assert_eq!(g.to_string(), "swipe right from (0,0) to (30,0)");

        let g = RecognizedGesture::Tap {
            position_down: Point::new(5.0, 6.0),
        };
        assert_eq!(g.to_string(), "tap at (5,6)");
    }
}
