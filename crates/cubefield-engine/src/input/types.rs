use crate::coords::Vec2;

/// Keyboard key identifier.
///
/// Covers the keys the runtime maps from physical key codes. Anything else is
/// reported as `Key::Unknown` carrying the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Mouse wheel delta.
///
/// `Line` is notch-style input; `Pixel` is high precision touchpad input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Logical pixels treated as one wheel line.
    pub const PIXELS_PER_LINE: f32 = 20.0;

    /// Returns the delta in wheel lines, +Y away from the user.
    pub fn in_lines(self) -> Vec2 {
        match self {
            MouseWheelDelta::Line { x, y } => Vec2::new(x, y),
            MouseWheelDelta::Pixel { x, y } => {
                Vec2::new(x / Self::PIXELS_PER_LINE, y / Self::PIXELS_PER_LINE)
            }
        }
    }
}

/// Absolute pointer position in logical pixels, top-left origin (+Y down).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button transition.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True when the event is an OS key-repeat.
        repeat: bool,
    },

    PointerMoved(PointerMoveEvent),

    /// Raw relative motion from the device, unaffected by cursor locking.
    PointerDelta { dx: f32, dy: f32 },

    PointerButton(PointerButtonEvent),

    MouseWheel(MouseWheelDelta),

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_delta_passes_through() {
        let d = MouseWheelDelta::Line { x: 0.0, y: 1.0 }.in_lines();
        assert_eq!(d, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn pixel_delta_is_scaled_to_lines() {
        let d = MouseWheelDelta::Pixel { x: 0.0, y: 40.0 }.in_lines();
        assert_eq!(d, Vec2::new(0.0, 2.0));
    }
}
