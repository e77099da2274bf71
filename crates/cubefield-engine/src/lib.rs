//! Cubefield engine crate.
//!
//! Platform runtime, GPU device, input, and the renderers used by the demo:
//! a textured cube pass plus a 2D overlay of solid rectangles and text.

pub mod assets;
pub mod coords;
pub mod core;
pub mod device;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
pub mod time;
pub mod window;
