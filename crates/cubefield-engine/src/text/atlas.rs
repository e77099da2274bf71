use std::collections::HashMap;

use super::FontFace;

/// Pixels left between neighbouring glyphs so linear sampling cannot bleed.
const GLYPH_PADDING: u32 = 1;

/// Placement and metrics of one glyph, in atlas raster pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GlyphMetrics {
    /// Atlas UV of the bitmap's top-left texel.
    pub uv_min: [f32; 2],
    /// Atlas UV of the bitmap's bottom-right texel.
    pub uv_max: [f32; 2],
    /// Bitmap width and height.
    pub size: [f32; 2],
    /// Offset from the pen position to the bitmap's left edge and top edge
    /// (+Y up from the baseline).
    pub bearing: [f32; 2],
    /// Horizontal pen advance.
    pub advance: f32,
}

/// Anything that can answer per-character glyph queries.
pub trait GlyphSource {
    fn glyph(&self, c: char) -> Option<GlyphMetrics>;
}

/// Row-based ("shelf") rectangle packer.
///
/// Rectangles are placed left to right; when one does not fit horizontally a
/// new row starts below the tallest rectangle of the current row.
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    width: u32,
    height: u32,
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
}

impl ShelfPacker {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cursor_x: GLYPH_PADDING,
            cursor_y: GLYPH_PADDING,
            row_height: 0,
        }
    }

    /// Reserves a `w`×`h` region and returns its top-left texel, or `None`
    /// when the packer is out of space.
    pub fn place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if w + 2 * GLYPH_PADDING > self.width {
            return None;
        }

        if self.cursor_x + w + GLYPH_PADDING > self.width {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }

        if self.cursor_y + h + GLYPH_PADDING > self.height {
            return None;
        }

        let placed = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(placed)
    }
}

/// CPU-side single-channel glyph atlas.
///
/// Built once at startup; the text renderer uploads `pixels()` as an R8
/// texture the first time it draws.
pub struct GlyphAtlas {
    width: u32,
    height: u32,
    raster_px: f32,
    pixels: Vec<u8>,
    packer: ShelfPacker,
    glyphs: HashMap<char, GlyphMetrics>,
}

impl GlyphAtlas {
    pub const DEFAULT_SIZE: u32 = 1024;

    pub fn new(width: u32, height: u32, raster_px: f32) -> Self {
        Self {
            width,
            height,
            raster_px,
            pixels: vec![0; (width * height) as usize],
            packer: ShelfPacker::new(width, height),
            glyphs: HashMap::new(),
        }
    }

    /// Rasterizes every character in `chars` at `raster_px`.
    ///
    /// Control characters, characters the face lacks and glyphs that no
    /// longer fit are skipped with a warning; the rest of the set still loads.
    pub fn build(font: &FontFace, raster_px: f32, chars: impl IntoIterator<Item = char>) -> Self {
        let mut atlas = Self::new(Self::DEFAULT_SIZE, Self::DEFAULT_SIZE, raster_px);
        let mut skipped = 0usize;

        for c in chars {
            if c.is_control() {
                continue;
            }
            if !font.has_glyph(c) {
                log::warn!("font has no glyph for {c:?}; skipping");
                skipped += 1;
                continue;
            }

            let (m, bitmap) = font.rasterize(c, raster_px);
            let bearing = [m.xmin as f32, (m.ymin + m.height as i32) as f32];

            if !atlas.insert_bitmap(c, m.width as u32, m.height as u32, &bitmap, bearing, m.advance_width) {
                log::warn!("glyph atlas full; {c:?} not loaded");
                skipped += 1;
            }
        }

        log::info!(
            "glyph atlas: {} glyphs at {}px ({} skipped)",
            atlas.glyphs.len(),
            raster_px,
            skipped
        );
        atlas
    }

    /// Copies a row-major, top-down coverage bitmap into the atlas.
    ///
    /// Zero-area glyphs (e.g. space) are recorded with metrics only.
    /// Returns `false` if the bitmap did not fit.
    pub fn insert_bitmap(
        &mut self,
        c: char,
        w: u32,
        h: u32,
        bitmap: &[u8],
        bearing: [f32; 2],
        advance: f32,
    ) -> bool {
        debug_assert_eq!(bitmap.len(), (w * h) as usize);

        let mut metrics = GlyphMetrics {
            size: [w as f32, h as f32],
            bearing,
            advance,
            ..GlyphMetrics::default()
        };

        if w > 0 && h > 0 {
            let Some((gx, gy)) = self.packer.place(w, h) else {
                return false;
            };

            for (row, src) in bitmap.chunks_exact(w as usize).enumerate() {
                let start = ((gy + row as u32) * self.width + gx) as usize;
                self.pixels[start..start + w as usize].copy_from_slice(src);
            }

            let (aw, ah) = (self.width as f32, self.height as f32);
            metrics.uv_min = [gx as f32 / aw, gy as f32 / ah];
            metrics.uv_max = [(gx + w) as f32 / aw, (gy + h) as f32 / ah];
        }

        self.glyphs.insert(c, metrics);
        true
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn raster_px(&self) -> f32 {
        self.raster_px
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl GlyphSource for GlyphAtlas {
    fn glyph(&self, c: char) -> Option<GlyphMetrics> {
        self.glyphs.get(&c).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── shelf packer ──────────────────────────────────────────────────────

    #[test]
    fn packs_left_to_right_then_wraps() {
        let mut p = ShelfPacker::new(32, 32);
        assert_eq!(p.place(10, 8), Some((1, 1)));
        assert_eq!(p.place(10, 12), Some((12, 1)));
        // 23 + 10 + 1 > 32: new row below the tallest (12).
        assert_eq!(p.place(10, 4), Some((1, 14)));
    }

    #[test]
    fn reports_full_when_height_exhausted() {
        let mut p = ShelfPacker::new(16, 16);
        assert!(p.place(14, 10).is_some());
        assert_eq!(p.place(14, 10), None);
    }

    #[test]
    fn rejects_rects_wider_than_the_atlas() {
        let mut p = ShelfPacker::new(16, 16);
        assert_eq!(p.place(15, 1), None);
    }

    // ── atlas ─────────────────────────────────────────────────────────────

    #[test]
    fn inserted_bitmap_lands_at_its_uv() {
        let mut atlas = GlyphAtlas::new(8, 8, 48.0);
        let bitmap = [10, 20, 30, 40];
        assert!(atlas.insert_bitmap('a', 2, 2, &bitmap, [1.0, 2.0], 3.0));

        let g = atlas.glyph('a').unwrap_or_default();
        assert_eq!(g.uv_min, [1.0 / 8.0, 1.0 / 8.0]);
        assert_eq!(g.uv_max, [3.0 / 8.0, 3.0 / 8.0]);
        assert_eq!(g.size, [2.0, 2.0]);

        // Row 1, column 1 of the atlas holds the first texel.
        assert_eq!(atlas.pixels()[8 + 1], 10);
        assert_eq!(atlas.pixels()[8 + 2], 20);
        assert_eq!(atlas.pixels()[16 + 1], 30);
        assert_eq!(atlas.pixels()[16 + 2], 40);
    }

    #[test]
    fn zero_area_glyph_keeps_its_advance() {
        let mut atlas = GlyphAtlas::new(8, 8, 48.0);
        assert!(atlas.insert_bitmap(' ', 0, 0, &[], [0.0, 0.0], 12.0));
        assert_eq!(atlas.glyph(' ').map(|g| g.advance), Some(12.0));
    }

    #[test]
    fn unknown_char_is_none() {
        let atlas = GlyphAtlas::new(8, 8, 48.0);
        assert!(atlas.glyph('z').is_none());
        assert!(atlas.is_empty());
    }
}
