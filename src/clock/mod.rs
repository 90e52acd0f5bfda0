//! Frame scheduling.
//!
//! The frame loop is an explicit [`FrameClock`] driven by the host's redraw
//! callback. Time comes from an injectable [`TimeSource`], so headless runs
//! and tests advance a [`ManualClock`] instead of waiting on a display.

mod frame;
mod interval;
mod time;

pub use frame::{FrameClock, FrameTick};
pub use interval::IntervalTimer;
pub use time::{ManualClock, SystemClock, TimeSource};
