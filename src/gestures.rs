//! Swipe / tap / hold classification for a single pointer.
//!
//! Driven once per tick with the current [`PointerSample`]; emits at
//! most one swipe and at most one tap-or-hold per call through the
//! public signal channels.

use crate::config::Thresholds;
use crate::pointer::{Point, PointerProvider, PointerSample};
use crate::signal::Signal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl SwipeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Classify the dominant axis of movement from `prev` to `pos`.
///
/// Strict `>` on the axis comparison means diagonal ties resolve to the
/// vertical branch.
pub fn swipe_direction(pos: Point, prev: Point) -> SwipeDirection {
    let dx = pos.x - prev.x;
    let dy = pos.y - prev.y;

    if dx.abs() > dy.abs() {
        if dx < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        }
    } else if dy < 0.0 {
        SwipeDirection::Up
    } else {
        SwipeDirection::Down
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeEvent {
    pub position_down: Point,
    pub position: Point,
    pub direction: SwipeDirection,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapEvent {
    pub position_down: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldEvent {
    pub position_down: Point,
}

/// Per-press gesture state machine.
///
/// The swipe check and the touch/hold check run independently on every
/// update, so one press can legitimately emit both a swipe and, once
/// the pointer settles back near the press point, a hold. Each kind
/// fires at most once per press; the latches clear on the tick where
/// the provider reports a negative duration.
#[derive(Debug)]
pub struct GestureRecognizer {
    th: Thresholds,

    swipe_dispatched: bool,
    hold_dispatched: bool,
    is_touching: bool,
    is_holding: bool,

    pub on_swipe: Signal<SwipeEvent>,
    pub on_tap: Signal<TapEvent>,
    pub on_hold: Signal<HoldEvent>,
}

impl GestureRecognizer {
    pub fn new(th: Thresholds) -> Self {
        Self {
            th,
            swipe_dispatched: false,
            hold_dispatched: false,
            is_touching: false,
            is_holding: false,
            on_swipe: Signal::new(),
            on_tap: Signal::new(),
            on_hold: Signal::new(),
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.th
    }

    /// Poll the provider and run one update tick.
    pub fn update_from<P: PointerProvider>(&mut self, provider: &P) {
        self.update(&provider.sample());
    }

    pub fn update(&mut self, sample: &PointerSample) {
        let distance = sample.position.distance(sample.position_down);
        let duration = sample.duration_ms;

        self.update_swipe(sample, distance, duration);
        self.update_touch(sample, distance, duration);
    }

    fn update_swipe(&mut self, sample: &PointerSample, distance: f32, duration: f32) {
        // distance/duration is inf for a zero duration and NaN for 0/0;
        // both fall out of the comparisons below without special cases.
        let velocity = distance / duration;

        if duration < 0.0 {
            self.swipe_dispatched = false;
        } else if !self.swipe_dispatched
            && distance > self.th.swipe_min_dist
            && velocity > self.th.swipe_velocity
        {
            let evt = SwipeEvent {
                position_down: sample.position_down,
                position: sample.position,
                direction: swipe_direction(sample.position, sample.position_down),
            };
            self.on_swipe.emit(&evt);
            self.swipe_dispatched = true;
        }
    }

    fn update_touch(&mut self, sample: &PointerSample, distance: f32, duration: f32) {
        if duration < 0.0 {
            // release tick: a pending touch becomes a tap
            if self.is_touching {
                let evt = TapEvent {
                    position_down: sample.position_down,
                };
                self.on_tap.emit(&evt);
            }
            self.is_touching = false;
            self.is_holding = false;
            self.hold_dispatched = false;
        } else if distance < self.th.swipe_min_dist {
            if duration < self.th.hold_ms {
                self.is_touching = true;
            } else {
                self.is_touching = false;
                self.is_holding = true;

                if !self.hold_dispatched {
                    self.hold_dispatched = true;
                    let evt = HoldEvent {
                        position_down: sample.position_down,
                    };
                    self.on_hold.emit(&evt);
                }
            }
        } else {
            // moved too far for tap/hold; only a swipe can still fire
            self.is_touching = false;
            self.is_holding = false;
        }
    }
}
