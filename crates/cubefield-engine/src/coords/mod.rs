//! Coordinate and geometry types shared across engine renderers and the demo.
//!
//! Two screen spaces exist:
//! - pointer space: logical pixels, origin top-left, +Y down (what the
//!   windowing system reports)
//! - overlay space: logical pixels, origin bottom-left, +Y up (what layout,
//!   hit-testing and the overlay renderers use)
//!
//! `Viewport::flip_y` converts between them.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
