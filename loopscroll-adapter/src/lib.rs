//! Motion and gesture utilities for the `loopscroll` crate.
//!
//! The `loopscroll` crate owns the node pool and the recycling math; it only moves when told
//! to. This crate produces those moves over time:
//!
//! - Distance-based tweens for animated jumps (`jump_index`, `jump_delta`, `reset`)
//! - Speed-based coasting after a drag is released
//! - A single-slot motion scheduler where starting a motion cancels the previous one
//! - A [`Controller`] that routes drag, wheel and programmatic requests to the view
//!
//! This crate is framework-agnostic: the caller supplies frame times and input events.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod gesture;
mod motion;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use gesture::{DragSample, DragTracker};
pub use motion::{MotionFrame, MotionSlot, MotionToken};
pub use tween::{CoastTween, Motion, MotionKind, MoveTween};
