//! Per-frame demo logic, free of window and GPU types.

use glam::Mat4;

use cubefield_engine::coords::{Vec2, Viewport};

use crate::button::Button;
use crate::camera::{Camera, CameraMovement};
use crate::cubes::{CubeField, Spin};
use crate::layout::OverlayLayout;
use crate::mode::OverlayMode;
use crate::motion::MotionTracker;
use crate::toggle::ToggleKey;

/// One frame of input, already reduced to what the demo reads.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub dt: f32,

    pub menu_held: bool,
    pub debug_held: bool,
    pub quit_held: bool,
    pub primary_held: bool,

    pub forward_held: bool,
    pub backward_held: bool,
    pub left_held: bool,
    pub right_held: bool,

    /// Absolute pointer positions in pointer space, in arrival order.
    pub pointer_positions: Vec<Vec2>,
    /// Raw device motion summed over the frame, +Y down.
    pub raw_motion: Vec2,
    /// Vertical wheel lines, +Y away from the user.
    pub scroll: f32,
}

/// What changed during `DemoState::update`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// The new mode, when the menu key toggled it this frame.
    pub mode_changed: Option<OverlayMode>,
    pub spin_flipped: bool,
    pub quit: bool,
}

/// Where camera look offsets come from.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum MotionSource {
    /// Differences between absolute pointer positions.
    #[default]
    Absolute,
    /// Raw device deltas; used whenever the cursor is grabbed, so look is
    /// not bounded by the window edges.
    Relative,
}

/// All mutable demo state.
#[derive(Debug, Clone)]
pub struct DemoState {
    viewport: Viewport,
    layout: OverlayLayout,
    mode: OverlayMode,

    menu_key: ToggleKey,
    debug_key: ToggleKey,
    quit_key: ToggleKey,
    debug_coordinates: bool,

    button: Button,
    camera: Camera,
    motion: MotionTracker,
    motion_source: MotionSource,
    cubes: CubeField,

    /// Latest pointer sample seen in overlay mode, overlay space.
    overlay_pointer: Option<Vec2>,
}

impl DemoState {
    pub fn new(viewport: Viewport) -> Self {
        let layout = OverlayLayout::compute(viewport);
        Self {
            viewport,
            layout,
            mode: OverlayMode::default(),
            menu_key: ToggleKey::default(),
            debug_key: ToggleKey::default(),
            quit_key: ToggleKey::default(),
            debug_coordinates: false,
            button: Button::new(layout.button),
            camera: Camera::default(),
            motion: MotionTracker::new(),
            motion_source: MotionSource::default(),
            cubes: CubeField::default(),
            overlay_pointer: None,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> OverlayLayout {
        self.layout
    }

    pub fn mode(&self) -> OverlayMode {
        self.mode
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn cubes(&self) -> &CubeField {
        &self.cubes
    }

    pub fn spin(&self) -> Spin {
        self.cubes.spin()
    }

    pub fn debug_coordinates(&self) -> bool {
        self.debug_coordinates
    }

    pub fn overlay_pointer(&self) -> Option<Vec2> {
        self.overlay_pointer
    }

    pub fn set_motion_source(&mut self, source: MotionSource) {
        self.motion_source = source;
    }

    /// Stores the new viewport and recomputes every overlay rectangle.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.layout = OverlayLayout::compute(viewport);
        self.button.set_rect(self.layout.button);
    }

    /// Advances the demo by one frame.
    pub fn update(&mut self, input: &FrameInput) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();

        self.process_pointer(input);

        if self.quit_key.update(input.quit_held) {
            outcome.quit = true;
        }

        if self.menu_key.update(input.menu_held) {
            self.mode = self.mode.toggled();
            if self.mode.captures_pointer() {
                self.motion.reset();
                self.button.clear_hover();
            }
            log::info!("mode: {:?}", self.mode);
            outcome.mode_changed = Some(self.mode);
        }

        // Hover is always false outside the overlay; presses there only
        // arm the latch.
        if self.button.update_click(input.primary_held) {
            let spin = self.cubes.flip_spin();
            log::info!("spin direction: {spin:?}");
            outcome.spin_flipped = true;
        }

        if self.debug_key.update(input.debug_held) {
            self.debug_coordinates = !self.debug_coordinates;
            log::info!("coordinate logging {}", if self.debug_coordinates { "on" } else { "off" });
        }

        if !self.mode.is_overlay() {
            self.move_camera(input);
            self.cubes.advance();
        }

        outcome
    }

    fn process_pointer(&mut self, input: &FrameInput) {
        if self.mode.is_overlay() {
            for &pos in &input.pointer_positions {
                let p = self.viewport.flip_y(pos);
                let inside = self.button.track_pointer(p);
                self.overlay_pointer = Some(p);

                if self.debug_coordinates {
                    let r = self.button.rect();
                    log::info!(
                        "pointer ({:.1}, {:.1}) inside={inside} | button tl.x {:.1} tr.x {:.1} bl.y {:.1} tl.y {:.1}",
                        p.x,
                        p.y,
                        r.top_left().x,
                        r.top_right().x,
                        r.bottom_left().y,
                        r.top_left().y,
                    );
                }
            }
            return;
        }

        self.button.clear_hover();

        let mut look = Vec2::zero();
        match self.motion_source {
            MotionSource::Absolute => {
                for &pos in &input.pointer_positions {
                    look += self.motion.absolute(pos);
                }
            }
            MotionSource::Relative => {
                if input.raw_motion != Vec2::zero() {
                    look += self.motion.relative(input.raw_motion);
                }
            }
        }

        if look != Vec2::zero() {
            self.camera.process_mouse_movement(look.x, look.y);
        }
        if input.scroll != 0.0 {
            self.camera.process_mouse_scroll(input.scroll);
        }
    }

    fn move_camera(&mut self, input: &FrameInput) {
        let held = [
            (input.forward_held, CameraMovement::Forward),
            (input.backward_held, CameraMovement::Backward),
            (input.left_held, CameraMovement::Left),
            (input.right_held, CameraMovement::Right),
        ];
        for (down, direction) in held {
            if down {
                self.camera.process_keyboard(direction, input.dt);
            }
        }
    }

    /// Projection and view for the cube pass.
    pub fn camera_matrices(&self) -> (Mat4, Mat4) {
        (
            self.camera.projection_matrix(self.viewport.aspect()),
            self.camera.view_matrix(),
        )
    }

    /// The two overlay debug lines: pointer position, then button corners.
    pub fn debug_lines(&self) -> [String; 2] {
        let pointer = match self.overlay_pointer {
            Some(p) => format!("Mouse: {:.0}, {:.0}", p.x, p.y),
            None => "Mouse: -".to_string(),
        };
        let r = self.button.rect();
        let button = format!(
            "Button: x {:.0}..{:.0} y {:.0}..{:.0}",
            r.top_left().x,
            r.top_right().x,
            r.bottom_left().y,
            r.top_left().y,
        );
        [pointer, button]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DemoState {
        DemoState::new(Viewport::new(800.0, 600.0))
    }

    fn menu_press() -> FrameInput {
        FrameInput { menu_held: true, ..FrameInput::default() }
    }

    fn open_menu(s: &mut DemoState) {
        s.update(&menu_press());
        s.update(&FrameInput::default());
        assert!(s.mode().is_overlay());
    }

    /// Pointer-space sample over the 800×600 button center (overlay (40, 570)).
    fn over_button() -> Vec<Vec2> {
        vec![Vec2::new(40.0, 30.0)]
    }

    // ── mode toggle ────────────────────────────────────────────────────────

    #[test]
    fn holding_menu_key_for_100_frames_toggles_once() {
        let mut s = state();
        let changes = (0..100).filter(|_| s.update(&menu_press()).mode_changed.is_some()).count();
        assert_eq!(changes, 1);
        assert_eq!(s.mode(), OverlayMode::Overlay);
    }

    #[test]
    fn overlay_freezes_rotation() {
        let mut s = state();
        s.update(&FrameInput::default());
        let angle = s.cubes().cubes()[0].angle;
        assert!(angle != 0.0);

        open_menu(&mut s);
        let frozen = s.cubes().cubes()[0].angle;
        for _ in 0..5 {
            s.update(&FrameInput::default());
        }
        assert_eq!(s.cubes().cubes()[0].angle, frozen);
    }

    #[test]
    fn escape_edge_requests_quit_once() {
        let mut s = state();
        let held = FrameInput { quit_held: true, ..FrameInput::default() };
        assert!(s.update(&held).quit);
        assert!(!s.update(&held).quit);
    }

    // ── button ─────────────────────────────────────────────────────────────

    #[test]
    fn click_inside_flips_spin_once_per_press() {
        let mut s = state();
        open_menu(&mut s);
        s.update(&FrameInput { pointer_positions: over_button(), ..FrameInput::default() });

        let held = FrameInput { primary_held: true, ..FrameInput::default() };
        assert!(s.update(&held).spin_flipped);
        for _ in 0..10 {
            assert!(!s.update(&held).spin_flipped);
        }
        assert_eq!(s.spin(), Spin::Positive);

        s.update(&FrameInput::default());
        assert!(s.update(&held).spin_flipped);
        assert_eq!(s.spin(), Spin::Negative);
    }

    #[test]
    fn press_dragged_onto_button_does_not_flip() {
        let mut s = state();
        open_menu(&mut s);

        let away = FrameInput {
            primary_held: true,
            pointer_positions: vec![Vec2::new(400.0, 300.0)],
            ..FrameInput::default()
        };
        assert!(!s.update(&away).spin_flipped);

        let onto = FrameInput { primary_held: true, pointer_positions: over_button(), ..FrameInput::default() };
        assert!(!s.update(&onto).spin_flipped);
        assert!(s.button().is_hovered());
        assert!(!s.update(&FrameInput { primary_held: true, ..FrameInput::default() }).spin_flipped);
        assert_eq!(s.spin(), Spin::Negative);
    }

    #[test]
    fn click_is_ignored_in_navigation() {
        let mut s = state();
        s.update(&FrameInput { pointer_positions: over_button(), ..FrameInput::default() });
        let out = s.update(&FrameInput { primary_held: true, ..FrameInput::default() });
        assert!(!out.spin_flipped);
        assert!(!s.button().is_hovered());
    }

    #[test]
    fn pointer_is_flipped_before_hit_testing() {
        let mut s = state();
        open_menu(&mut s);
        s.update(&FrameInput { pointer_positions: vec![Vec2::new(40.0, 570.0)], ..FrameInput::default() });
        assert!(!s.button().is_hovered());
        assert_eq!(s.overlay_pointer(), Some(Vec2::new(40.0, 30.0)));
    }

    // ── motion reference ───────────────────────────────────────────────────

    #[test]
    fn reentering_navigation_swallows_the_first_sample() {
        let mut s = state();
        s.update(&FrameInput { pointer_positions: vec![Vec2::new(400.0, 300.0)], ..FrameInput::default() });

        open_menu(&mut s);
        s.update(&FrameInput { pointer_positions: vec![Vec2::new(10.0, 10.0)], ..FrameInput::default() });

        s.update(&menu_press());
        assert_eq!(s.mode(), OverlayMode::Navigation);
        let yaw = s.camera().yaw();
        let pitch = s.camera().pitch();

        s.update(&FrameInput { pointer_positions: vec![Vec2::new(790.0, 590.0)], ..FrameInput::default() });
        assert_eq!(s.camera().yaw(), yaw);
        assert_eq!(s.camera().pitch(), pitch);

        s.update(&FrameInput { pointer_positions: vec![Vec2::new(800.0, 590.0)], ..FrameInput::default() });
        assert!(s.camera().yaw() > yaw);
    }

    #[test]
    fn relative_motion_also_resets_on_reentry() {
        let mut s = state();
        s.set_motion_source(MotionSource::Relative);
        s.update(&FrameInput { raw_motion: Vec2::new(1.0, 0.0), ..FrameInput::default() });

        open_menu(&mut s);
        s.update(&menu_press());
        let yaw = s.camera().yaw();

        s.update(&FrameInput { raw_motion: Vec2::new(500.0, 0.0), ..FrameInput::default() });
        assert_eq!(s.camera().yaw(), yaw);
    }

    #[test]
    fn raw_motion_turns_camera_with_pointer_pinned_at_edge() {
        let mut s = state();
        s.set_motion_source(MotionSource::Relative);
        let pinned = |dx: f32| FrameInput {
            pointer_positions: vec![Vec2::new(799.0, 300.0)],
            raw_motion: Vec2::new(dx, 0.0),
            ..FrameInput::default()
        };

        // First sample after start only sets the reference.
        s.update(&pinned(50.0));
        let yaw = s.camera().yaw();

        for _ in 0..100 {
            s.update(&pinned(50.0));
        }
        // 100 × 50 px × 0.1 sensitivity.
        assert!((s.camera().yaw() - (yaw + 500.0)).abs() < 1e-2);
    }

    // ── resize ─────────────────────────────────────────────────────────────

    #[test]
    fn resize_moves_the_hit_area() {
        let mut s = state();
        s.resize(Viewport::new(1600.0, 600.0));
        assert_eq!(s.layout().panel.width(), 160.0);
        assert_eq!(s.button().rect().width(), 160.0);
        assert_eq!(s.button().rect().top_left().y, 600.0);

        open_menu(&mut s);
        s.update(&FrameInput { pointer_positions: vec![Vec2::new(120.0, 30.0)], ..FrameInput::default() });
        assert!(s.button().is_hovered());
    }

    // ── debug ──────────────────────────────────────────────────────────────

    #[test]
    fn debug_toggle_is_edge_triggered() {
        let mut s = state();
        let held = FrameInput { debug_held: true, ..FrameInput::default() };
        s.update(&held);
        s.update(&held);
        assert!(s.debug_coordinates());
        s.update(&FrameInput::default());
        s.update(&held);
        assert!(!s.debug_coordinates());
    }

    #[test]
    fn debug_lines_show_button_corners() {
        let s = state();
        let [pointer, button] = s.debug_lines();
        assert_eq!(pointer, "Mouse: -");
        assert_eq!(button, "Button: x 0..80 y 540..600");
    }
}
