//! Static vertex data.
//!
//! - `cube`: 36-vertex unit cube (position + texture coordinate), drawn as a
//!   non-indexed triangle list
//! - `quad`: indexed unit quad, instanced by the overlay renderers

mod cube;
mod quad;

pub use cube::{CubeVertex, CUBE_VERTICES};
pub use quad::{QuadVertex, QUAD_INDICES, QUAD_VERTICES};
