use std::collections::HashSet;

use crate::coords::Vec2;

use super::GlyphSource;

/// One positioned glyph in overlay space (bottom-left origin).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlyphQuad {
    pub c: char,
    /// Bottom-left corner.
    pub min: Vec2,
    pub size: Vec2,
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
}

/// Characters that had no glyph; each one is warned about once.
#[derive(Debug, Default)]
pub struct MissingGlyphs {
    reported: HashSet<char>,
}

impl MissingGlyphs {
    /// Records `c`, warning the first time it is seen. Returns whether this
    /// was the first report.
    pub fn report(&mut self, c: char) -> bool {
        let first = self.reported.insert(c);
        if first {
            log::warn!("no glyph for {c:?}; skipped");
        }
        first
    }
}

/// Lays out a single line of text starting at `origin` on the baseline.
///
/// Each glyph's quad is offset by its bearing and the pen moves right by its
/// advance, everything multiplied by `scale`. Characters the source does not
/// know go to `missing` and do not move the pen. Zero-area glyphs advance the
/// pen but emit no quad.
pub fn layout_line<S: GlyphSource + ?Sized>(
    source: &S,
    text: &str,
    origin: Vec2,
    scale: f32,
    missing: &mut MissingGlyphs,
) -> Vec<GlyphQuad> {
    let mut quads = Vec::with_capacity(text.len());
    let mut pen_x = origin.x;

    for c in text.chars() {
        let Some(g) = source.glyph(c) else {
            missing.report(c);
            continue;
        };

        let w = g.size[0] * scale;
        let h = g.size[1] * scale;

        if w > 0.0 && h > 0.0 {
            let x = pen_x + g.bearing[0] * scale;
            // Bitmap top sits `bearing.y` above the baseline.
            let y = origin.y - (g.size[1] - g.bearing[1]) * scale;

            quads.push(GlyphQuad {
                c,
                min: Vec2::new(x, y),
                size: Vec2::new(w, h),
                uv_min: g.uv_min,
                uv_max: g.uv_max,
            });
        }

        pen_x += g.advance * scale;
    }

    quads
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::GlyphMetrics;

    /// Fixed-metric source: every ASCII letter is a 10×20 box with a 2px left
    /// bearing, 15px top bearing (5px descender) and 12px advance.
    struct BoxFont;

    impl GlyphSource for BoxFont {
        fn glyph(&self, c: char) -> Option<GlyphMetrics> {
            match c {
                ' ' => Some(GlyphMetrics { advance: 8.0, ..GlyphMetrics::default() }),
                c if c.is_ascii_alphabetic() => Some(GlyphMetrics {
                    uv_min: [0.0, 0.0],
                    uv_max: [0.5, 0.5],
                    size: [10.0, 20.0],
                    bearing: [2.0, 15.0],
                    advance: 12.0,
                }),
                _ => None,
            }
        }
    }

    #[test]
    fn pen_advances_per_glyph() {
        let quads = layout_line(&BoxFont, "ab", Vec2::new(25.0, 25.0), 1.0, &mut MissingGlyphs::default());
        assert_eq!(quads.len(), 2);
        assert_eq!(quads[0].min, Vec2::new(27.0, 20.0));
        assert_eq!(quads[1].min, Vec2::new(39.0, 20.0));
        assert_eq!(quads[0].size, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn scale_applies_to_offsets_sizes_and_advance() {
        let quads = layout_line(&BoxFont, "ab", Vec2::new(0.0, 100.0), 0.5, &mut MissingGlyphs::default());
        assert_eq!(quads[0].min, Vec2::new(1.0, 97.5));
        assert_eq!(quads[0].size, Vec2::new(5.0, 10.0));
        assert_eq!(quads[1].min.x, 7.0);
    }

    #[test]
    fn space_advances_without_a_quad() {
        let quads = layout_line(&BoxFont, "a b", Vec2::new(0.0, 0.0), 1.0, &mut MissingGlyphs::default());
        assert_eq!(quads.len(), 2);
        assert_eq!(quads[1].min.x, 12.0 + 8.0 + 2.0);
    }

    #[test]
    fn unknown_glyph_is_skipped_and_rendering_continues() {
        let quads = layout_line(&BoxFont, "a€b", Vec2::new(0.0, 0.0), 1.0, &mut MissingGlyphs::default());
        let chars: Vec<char> = quads.iter().map(|q| q.c).collect();
        assert_eq!(chars, vec!['a', 'b']);
        assert_eq!(quads[1].min.x, 14.0);
    }

    #[test]
    fn missing_glyph_is_reported_once_across_frames() {
        let mut missing = MissingGlyphs::default();
        for _ in 0..3 {
            layout_line(&BoxFont, "€a€", Vec2::new(0.0, 0.0), 1.0, &mut missing);
        }
        assert!(!missing.report('€'));
        assert!(missing.report('©'));
    }
}
