use super::Vec2;

/// Drawable window area in logical pixels.
///
/// Owned by the application and replaced on every resize notification.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height, or `1.0` for a degenerate (minimized) viewport.
    #[inline]
    pub fn aspect(self) -> f32 {
        if self.is_valid() { self.width / self.height } else { 1.0 }
    }

    /// Mirrors a point vertically across this viewport.
    ///
    /// Converts pointer space (top-left origin) into overlay space
    /// (bottom-left origin) and back; applying it twice is the identity.
    #[inline]
    pub fn flip_y(self, p: Vec2) -> Vec2 {
        Vec2::new(p.x, self.height - p.y)
    }
}
