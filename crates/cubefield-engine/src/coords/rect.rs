use super::Vec2;

/// Axis-aligned rectangle in overlay space (bottom-left origin, +Y up).
///
/// Stored as its four corners. The corners are private and only set together
/// by the constructors, so the axis-alignment invariant always holds:
/// - `top_left.x == bottom_left.x` and `top_right.x == bottom_right.x`
/// - `top_left.y == top_right.y` and `bottom_left.y == bottom_right.y`
/// - `width() >= 0` and `height() >= 0`
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    top_left: Vec2,
    top_right: Vec2,
    bottom_left: Vec2,
    bottom_right: Vec2,
}

impl Rect {
    /// Builds a rectangle from its bottom-left corner and size.
    ///
    /// Negative sizes are folded so the anchor becomes the opposite corner.
    #[inline]
    pub fn from_bottom_left(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_edges(x, y, x + width, y + height)
    }

    /// Builds a rectangle whose top edge sits exactly at `top`.
    #[inline]
    pub fn from_top_left(x: f32, top: f32, width: f32, height: f32) -> Self {
        Self::from_edges(x, top - height, x + width, top)
    }

    fn from_edges(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        let (x0, x1) = if right < left { (right, left) } else { (left, right) };
        let (y0, y1) = if top < bottom { (top, bottom) } else { (bottom, top) };

        Self {
            top_left: Vec2::new(x0, y1),
            top_right: Vec2::new(x1, y1),
            bottom_left: Vec2::new(x0, y0),
            bottom_right: Vec2::new(x1, y0),
        }
    }

    #[inline]
    pub fn top_left(self) -> Vec2 {
        self.top_left
    }

    #[inline]
    pub fn top_right(self) -> Vec2 {
        self.top_right
    }

    #[inline]
    pub fn bottom_left(self) -> Vec2 {
        self.bottom_left
    }

    #[inline]
    pub fn bottom_right(self) -> Vec2 {
        self.bottom_right
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.top_right.x - self.top_left.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.top_left.y - self.bottom_left.y
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.bottom_left.is_finite() && self.top_right.is_finite()
    }

    /// Open containment: points on any edge are outside.
    #[inline]
    pub fn contains_strict(self, p: Vec2) -> bool {
        self.top_left.x < p.x
            && p.x < self.top_right.x
            && self.bottom_left.y < p.y
            && p.y < self.top_left.y
    }
}
