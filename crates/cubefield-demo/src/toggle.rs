/// Edge latch for a key or button polled once per frame.
///
/// Reports a single press no matter how many frames the input stays held;
/// the latch re-arms only after a frame where it is released.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ToggleKey {
    #[default]
    Released,
    Pressed,
}

impl ToggleKey {
    /// Feeds this frame's held state. Returns `true` on the press edge.
    pub fn update(&mut self, held: bool) -> bool {
        match (*self, held) {
            (ToggleKey::Released, true) => {
                *self = ToggleKey::Pressed;
                true
            }
            (ToggleKey::Pressed, false) => {
                *self = ToggleKey::Released;
                false
            }
            _ => false,
        }
    }

    pub fn is_pressed(self) -> bool {
        self == ToggleKey::Pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_held_frame_is_the_only_edge() {
        let mut key = ToggleKey::default();
        let edges = (0..100).filter(|_| key.update(true)).count();
        assert_eq!(edges, 1);
        assert!(key.is_pressed());
    }

    #[test]
    fn release_rearms_the_latch() {
        let mut key = ToggleKey::default();
        assert!(key.update(true));
        assert!(!key.update(true));
        assert!(!key.update(false));
        assert_eq!(key, ToggleKey::Released);
        assert!(key.update(true));
    }

    #[test]
    fn idle_frames_never_fire() {
        let mut key = ToggleKey::default();
        assert!((0..10).all(|_| !key.update(false)));
    }
}
