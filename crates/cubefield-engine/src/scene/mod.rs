//! Overlay draw stream.
//!
//! The application records rectangles and text into a `DrawList` each frame;
//! the overlay renderers consume it in insertion order (back-to-front).
//! Coordinates are overlay space: logical pixels, bottom-left origin.

mod cmd;
mod list;

pub use cmd::{DrawCmd, RectCmd, TextCmd};
pub use list::DrawList;
