use cubefield_engine::coords::Vec2;

/// Turns pointer motion into camera look offsets.
///
/// Offsets are `(dx, dy)` with +Y meaning "look up". After `reset` the next
/// sample only re-establishes the reference and yields zero.
#[derive(Debug, Clone)]
pub struct MotionTracker {
    last: Option<Vec2>,
    settling: bool,
}

impl Default for MotionTracker {
    fn default() -> Self {
        Self {
            last: None,
            settling: true,
        }
    }
}

impl MotionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the reference; the next sample of either kind yields zero.
    pub fn reset(&mut self) {
        self.last = None;
        self.settling = true;
    }

    /// Absolute pointer position in pointer space (top-left origin).
    pub fn absolute(&mut self, pos: Vec2) -> Vec2 {
        let offset = match self.last {
            Some(last) if !self.settling => Vec2::new(pos.x - last.x, last.y - pos.y),
            _ => Vec2::zero(),
        };
        self.last = Some(pos);
        self.settling = false;
        offset
    }

    /// Raw device motion (+Y down), used while the cursor is grabbed.
    pub fn relative(&mut self, delta: Vec2) -> Vec2 {
        if self.settling {
            self.settling = false;
            return Vec2::zero();
        }
        Vec2::new(delta.x, -delta.y)
    }
}
