//! Frame timing.
//!
//! One `FrameClock` lives in the runtime; `tick()` is called once per redraw
//! and the resulting `FrameTime` is handed to the application.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
