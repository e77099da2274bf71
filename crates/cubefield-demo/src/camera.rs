//! Yaw/pitch fly camera.

use glam::{Mat4, Vec3};

/// Keyboard movement directions, relative to where the camera faces.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Euler-angle camera with mouse look and scroll zoom.
///
/// Angles are in degrees. `zoom` is the vertical field of view.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,

    yaw: f32,
    pitch: f32,

    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    zoom: f32,
}

impl Camera {
    pub const YAW: f32 = -90.0;
    pub const PITCH: f32 = 0.0;
    pub const SPEED: f32 = 2.5;
    pub const SENSITIVITY: f32 = 0.1;
    pub const ZOOM: f32 = 45.0;

    pub const PITCH_LIMIT: f32 = 89.0;
    pub const ZOOM_MIN: f32 = 1.0;
    pub const ZOOM_MAX: f32 = 45.0;

    pub const NEAR: f32 = 0.1;
    pub const FAR: f32 = 100.0;

    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: Self::YAW,
            pitch: Self::PITCH,
            movement_speed: Self::SPEED,
            mouse_sensitivity: Self::SENSITIVITY,
            zoom: Self::ZOOM,
        };
        camera.update_vectors();
        camera
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection with the current zoom as field of view.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, Self::NEAR, Self::FAR)
    }

    pub fn process_keyboard(&mut self, direction: CameraMovement, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Applies a look offset in pointer units (+Y looks up).
    pub fn process_mouse_movement(&mut self, xoffset: f32, yoffset: f32) {
        self.yaw += xoffset * self.mouse_sensitivity;
        self.pitch += yoffset * self.mouse_sensitivity;
        self.pitch = self.pitch.clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
        self.update_vectors();
    }

    /// Scrolling away from the user narrows the field of view.
    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        self.zoom = (self.zoom - yoffset).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn default_looks_down_negative_z() {
        let cam = Camera::default();
        assert!(close(cam.front(), Vec3::NEG_Z));
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(cam.zoom(), 45.0);
    }

    #[test]
    fn forward_moves_by_speed_times_dt() {
        let mut cam = Camera::default();
        cam.process_keyboard(CameraMovement::Forward, 0.5);
        assert!(close(cam.position, Vec3::new(0.0, 0.0, 1.75)));
        cam.process_keyboard(CameraMovement::Right, 1.0);
        assert!(close(cam.position, Vec3::new(2.5, 0.0, 1.75)));
    }

    #[test]
    fn pitch_is_clamped() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(0.0, 10_000.0);
        assert_eq!(cam.pitch(), 89.0);
        cam.process_mouse_movement(0.0, -10_000.0);
        assert_eq!(cam.pitch(), -89.0);
    }

    #[test]
    fn mouse_offsets_are_scaled_by_sensitivity() {
        let mut cam = Camera::default();
        cam.process_mouse_movement(100.0, 0.0);
        assert!((cam.yaw() - (-80.0)).abs() < 1e-4);
    }

    #[test]
    fn zoom_stays_within_bounds() {
        let mut cam = Camera::default();
        cam.process_mouse_scroll(-5.0);
        assert_eq!(cam.zoom(), 45.0);
        cam.process_mouse_scroll(100.0);
        assert_eq!(cam.zoom(), 1.0);
    }

    #[test]
    fn view_matrix_moves_world_opposite_to_camera() {
        let cam = Camera::default();
        let origin_in_view = cam.view_matrix().transform_point3(Vec3::ZERO);
        assert!(close(origin_in_view, Vec3::new(0.0, 0.0, -3.0)));
    }
}
