use cubefield_engine::coords::{Rect, Vec2};

use crate::toggle::ToggleKey;

/// The overlay's single button: current rectangle, hover and click latch.
#[derive(Debug, Clone, Default)]
pub struct Button {
    rect: Rect,
    hovered: bool,
    latch: ToggleKey,
}

impl Button {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            ..Self::default()
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Replaces the hit-test rectangle after a relayout.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Re-tests a pointer sample given in overlay space.
    pub fn track_pointer(&mut self, p: Vec2) -> bool {
        self.hovered = self.rect.contains_strict(p);
        self.hovered
    }

    pub fn clear_hover(&mut self) {
        self.hovered = false;
    }

    /// Feeds this frame's primary-button state.
    ///
    /// Returns `true` only on the frame the button goes down while hovered.
    /// Holding does not repeat, and dragging a press in from outside never
    /// counts.
    pub fn update_click(&mut self, primary_held: bool) -> bool {
        let pressed = self.latch.update(primary_held);
        pressed && self.hovered
    }
}
