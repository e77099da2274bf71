use std::collections::HashSet;

use crate::coords::Vec2;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for the window.
///
/// Holds "is down" information and current pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels, top-left origin.
    pub pointer_pos: Option<Vec2>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Release events are not delivered while unfocused.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some(Vec2::new(*x, *y));
            }

            InputEvent::PointerDelta { dx, dy } => {
                frame.pointer_delta += Vec2::new(*dx, *dy);
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(key) {
                        frame.keys_released.insert(*key);
                    }
                }
            },

            InputEvent::PointerButton(PointerButtonEvent { button, state }) => match state {
                MouseButtonState::Pressed => {
                    if self.buttons_down.insert(*button) {
                        frame.buttons_pressed.insert(*button);
                    }
                }
                MouseButtonState::Released => {
                    if self.buttons_down.remove(button) {
                        frame.buttons_released.insert(*button);
                    }
                }
            },

            InputEvent::MouseWheel(delta) => {
                frame.scroll_delta += delta.in_lines();
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseWheelDelta;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    fn button(button: MouseButton, state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button, state })
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn repeated_press_records_one_transition() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, key(Key::M, KeyState::Pressed));
        fr.clear();
        st.apply_event(&mut fr, InputEvent::Key { key: Key::M, state: KeyState::Pressed, repeat: true });

        assert!(st.key_down(Key::M));
        assert!(fr.keys_pressed.is_empty());
        assert_eq!(fr.events.len(), 1);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, key(Key::X, KeyState::Released));
        assert!(fr.keys_released.is_empty());
    }

    // ── buttons ───────────────────────────────────────────────────────────

    #[test]
    fn button_press_and_release() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, button(MouseButton::Left, MouseButtonState::Pressed));
        assert!(st.button_down(MouseButton::Left));
        assert!(fr.buttons_pressed.contains(&MouseButton::Left));

        st.apply_event(&mut fr, button(MouseButton::Left, MouseButtonState::Released));
        assert!(!st.button_down(MouseButton::Left));
        assert!(fr.buttons_released.contains(&MouseButton::Left));
    }

    // ── focus ─────────────────────────────────────────────────────────────

    #[test]
    fn focus_loss_clears_held_sets() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, key(Key::W, KeyState::Pressed));
        st.apply_event(&mut fr, button(MouseButton::Left, MouseButtonState::Pressed));
        st.apply_event(&mut fr, InputEvent::Focused(false));

        assert!(st.keys_down.is_empty());
        assert!(st.buttons_down.is_empty());
        assert!(!st.focused);
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn pointer_position_tracks_and_clears() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        assert_eq!(st.pointer_pos, Some(Vec2::new(3.0, 4.0)));

        st.apply_event(&mut fr, InputEvent::PointerLeft);
        assert_eq!(st.pointer_pos, None);
    }

    #[test]
    fn deltas_accumulate_until_cleared() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        st.apply_event(&mut fr, InputEvent::PointerDelta { dx: 1.0, dy: -2.0 });
        st.apply_event(&mut fr, InputEvent::PointerDelta { dx: 0.5, dy: 1.0 });
        st.apply_event(&mut fr, InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 1.0 }));
        st.apply_event(&mut fr, InputEvent::MouseWheel(MouseWheelDelta::Line { x: 0.0, y: 2.0 }));

        assert_eq!(fr.pointer_delta, Vec2::new(1.5, -1.0));
        assert_eq!(fr.scroll_delta, Vec2::new(0.0, 3.0));

        fr.clear();
        assert_eq!(fr.pointer_delta, Vec2::zero());
        assert_eq!(fr.scroll_delta, Vec2::zero());
        assert!(fr.events.is_empty());
    }
}
