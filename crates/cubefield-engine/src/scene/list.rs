use crate::coords::{Rect, Vec2};
use crate::paint::Color;

use super::{DrawCmd, RectCmd, TextCmd};

/// Recorded overlay draw stream for one frame.
///
/// Paint order is insertion order. `clear()` keeps capacity for reuse.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Records a solid rectangle. Empty rectangles are dropped.
    pub fn push_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.push(DrawCmd::Rect(RectCmd { rect, color }));
    }

    /// Records a line of text whose baseline starts at `origin`.
    pub fn push_text(&mut self, text: impl Into<String>, origin: Vec2, scale: f32, color: Color) {
        self.push(DrawCmd::Text(TextCmd {
            text: text.into(),
            origin,
            scale,
            color,
        }));
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::Rect(r) => Some(r),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::Text(t) => Some(t),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut dl = DrawList::new();
        let panel = Rect::from_bottom_left(0.0, 0.0, 80.0, 600.0);
        let button = Rect::from_bottom_left(0.0, 540.0, 80.0, 60.0);
        dl.push_rect(panel, Color::WHITE);
        dl.push_rect(button, Color::BLACK);

        let rects: Vec<_> = dl.rects().map(|r| r.rect).collect();
        assert_eq!(rects, vec![panel, button]);
    }

    #[test]
    fn empty_rect_is_not_recorded() {
        let mut dl = DrawList::new();
        dl.push_rect(Rect::from_bottom_left(0.0, 0.0, 0.0, 10.0), Color::BLACK);
        assert!(dl.is_empty());
    }

    #[test]
    fn text_and_rects_are_filtered_separately() {
        let mut dl = DrawList::new();
        dl.push_text("hello", Vec2::new(25.0, 25.0), 0.5, Color::BLACK);
        dl.push_rect(Rect::from_bottom_left(0.0, 0.0, 1.0, 1.0), Color::BLACK);

        assert_eq!(dl.texts().count(), 1);
        assert_eq!(dl.rects().count(), 1);

        dl.clear();
        assert!(dl.is_empty());
    }
}
