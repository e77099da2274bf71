//! Overlay layout.
//!
//! Rectangles are in overlay space (bottom-left origin) and derived purely
//! from the viewport, so recomputing for the same size is bit-identical.

use cubefield_engine::coords::{Rect, Viewport};

/// Overlay elements with a computed rectangle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ElementKind {
    /// Full-height strip along the left edge.
    Panel,
    /// Box in the panel's top-left corner.
    Button,
}

/// Panel and button width, and button height, as a divisor of the viewport.
const TENTH: f32 = 10.0;

/// Rectangle for `kind` in a window of `viewport` logical pixels.
pub fn layout_element(kind: ElementKind, viewport: Viewport) -> Rect {
    let w = viewport.width / TENTH;
    match kind {
        ElementKind::Panel => Rect::from_bottom_left(0.0, 0.0, w, viewport.height),
        ElementKind::Button => {
            let h = viewport.height / TENTH;
            Rect::from_top_left(0.0, viewport.height, w, h)
        }
    }
}

/// Every overlay rectangle for one viewport.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct OverlayLayout {
    pub panel: Rect,
    pub button: Rect,
}

impl OverlayLayout {
    pub fn compute(viewport: Viewport) -> Self {
        Self {
            panel: layout_element(ElementKind::Panel, viewport),
            button: layout_element(ElementKind::Button, viewport),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubefield_engine::coords::Vec2;

    // ── default window ─────────────────────────────────────────────────────

    #[test]
    fn panel_spans_left_tenth_full_height() {
        let panel = layout_element(ElementKind::Panel, Viewport::new(800.0, 600.0));
        assert_eq!(panel.bottom_left(), Vec2::new(0.0, 0.0));
        assert_eq!(panel.top_right(), Vec2::new(80.0, 600.0));
    }

    #[test]
    fn button_hugs_the_top_edge() {
        let button = layout_element(ElementKind::Button, Viewport::new(800.0, 600.0));
        assert_eq!(button.bottom_left(), Vec2::new(0.0, 540.0));
        assert_eq!(button.top_right(), Vec2::new(80.0, 600.0));
        assert_eq!(button.size(), Vec2::new(80.0, 60.0));
    }

    // ── resize ─────────────────────────────────────────────────────────────

    #[test]
    fn wider_window_doubles_widths_and_keeps_the_button_on_top() {
        let before = OverlayLayout::compute(Viewport::new(800.0, 600.0));
        let after = OverlayLayout::compute(Viewport::new(1600.0, 600.0));

        assert_eq!(before.panel.width(), 80.0);
        assert_eq!(after.panel.width(), 160.0);
        assert_eq!(after.button.width(), 160.0);
        assert_eq!(after.button.top_left().y, 600.0);
        assert_eq!(after.button.bottom_left().y, 540.0);
    }

    #[test]
    fn arbitrary_sizes_follow_the_proportions() {
        for &(w, h) in &[(1.0, 1.0), (333.0, 777.0), (1920.0, 1080.0), (50.5, 20.25)] {
            let l = OverlayLayout::compute(Viewport::new(w, h));

            assert_eq!(l.panel.bottom_left(), Vec2::new(0.0, 0.0));
            assert_eq!(l.panel.size(), Vec2::new(w / 10.0, h));

            assert_eq!(l.button.top_left(), Vec2::new(0.0, h));
            assert_eq!(l.button.width(), w / 10.0);
            assert_eq!(l.button.bottom_left().y, h - h / 10.0);
        }
    }

    #[test]
    fn recomputing_is_idempotent() {
        let vp = Viewport::new(1024.0, 768.0);
        assert_eq!(OverlayLayout::compute(vp), OverlayLayout::compute(vp));
    }
}
