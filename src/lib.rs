//! Single-pointer gesture recognition: swipe, tap, and hold.
//!
//! The core is [`gestures::GestureRecognizer`], a per-tick state
//! machine fed [`pointer::PointerSample`]s by the host loop. Events
//! come out through synchronous [`signal::Signal`] channels. The rest
//! of the crate is infrastructure: TOML threshold profiles, an
//! evdev-backed provider for Linux touch devices, and offline trace
//! replay.

pub mod config;
pub mod error;
pub mod gestures;
pub mod input;
pub mod logging;
pub mod pipeline;
pub mod pointer;
pub mod replay;
pub mod signal;
pub mod tracker;

pub use config::Thresholds;
pub use error::{Error, Result};
pub use gestures::{GestureRecognizer, HoldEvent, SwipeDirection, SwipeEvent, TapEvent};
pub use pointer::{Point, PointerProvider, PointerSample, RELEASED_DURATION};
pub use signal::Signal;
