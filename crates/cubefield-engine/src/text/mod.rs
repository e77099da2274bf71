//! Font loading, glyph atlas and line layout.
//!
//! The atlas is rasterized once at startup; per frame, `layout_line` turns a
//! string into positioned glyph quads that the text renderer instances.

mod atlas;
mod font;
mod layout;

pub use atlas::{GlyphAtlas, GlyphMetrics, GlyphSource, ShelfPacker};
pub use font::{FontFace, FontLoadError};
pub use layout::{layout_line, GlyphQuad, MissingGlyphs};
