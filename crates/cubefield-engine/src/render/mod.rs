//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipelines, buffers, textures) and
//! creates them lazily on first use, rebuilding pipelines if the surface
//! format changes.
//!
//! Conventions:
//! - overlay geometry is in logical pixels, bottom-left origin (+Y up), and
//!   an orthographic projection over the viewport maps it to clip space
//! - the cube renderer runs first with its own depth buffer; overlay passes
//!   load the color target and draw on top without depth

mod common;
mod ctx;
mod cube;
mod rect;
mod text;

pub use ctx::{RenderCtx, RenderTarget};
pub use cube::{CameraMatrices, CubeRenderer};
pub use rect::RectRenderer;
pub use text::TextRenderer;
