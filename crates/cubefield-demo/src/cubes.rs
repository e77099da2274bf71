use glam::{Mat4, Vec3};

/// World positions of the cube field.
pub const CUBE_POSITIONS: [Vec3; 10] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 5.0, -15.0),
    Vec3::new(-1.5, -2.2, -2.5),
    Vec3::new(-3.8, -2.0, -12.3),
    Vec3::new(2.4, -0.4, -3.5),
    Vec3::new(-1.7, 3.0, -7.5),
    Vec3::new(1.3, -2.0, -2.5),
    Vec3::new(1.5, 2.0, -2.5),
    Vec3::new(1.5, 0.2, -1.5),
    Vec3::new(-1.3, 1.0, -1.5),
];

/// Radians added per frame while spinning.
pub const ROTATION_STEP: f32 = 0.01;

/// Unnormalized rotation axis shared by every cube.
const ROTATION_AXIS: Vec3 = Vec3::new(1.0, 0.3, 0.5);

/// Shared rotation direction.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Spin {
    Positive,
    #[default]
    Negative,
}

impl Spin {
    pub fn flipped(self) -> Self {
        match self {
            Spin::Positive => Spin::Negative,
            Spin::Negative => Spin::Positive,
        }
    }

    /// Signed per-frame angle increment.
    pub fn step(self) -> f32 {
        match self {
            Spin::Positive => ROTATION_STEP,
            Spin::Negative => -ROTATION_STEP,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cube {
    pub position: Vec3,
    pub angle: f32,
}

impl Cube {
    /// Translate, then rotate about the shared axis.
    pub fn model(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_axis_angle(ROTATION_AXIS.normalize(), self.angle)
    }
}

/// All cubes plus the direction they turn in.
#[derive(Debug, Clone)]
pub struct CubeField {
    cubes: Vec<Cube>,
    spin: Spin,
}

impl Default for CubeField {
    fn default() -> Self {
        Self::new(&CUBE_POSITIONS)
    }
}

impl CubeField {
    pub fn new(positions: &[Vec3]) -> Self {
        Self {
            cubes: positions.iter().map(|&position| Cube { position, angle: 0.0 }).collect(),
            spin: Spin::default(),
        }
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn spin(&self) -> Spin {
        self.spin
    }

    pub fn flip_spin(&mut self) -> Spin {
        self.spin = self.spin.flipped();
        self.spin
    }

    /// Advances every cube by one step in the current direction.
    pub fn advance(&mut self) {
        let step = self.spin.step();
        for cube in &mut self.cubes {
            cube.angle += step;
        }
    }

    pub fn models(&self) -> Vec<Mat4> {
        self.cubes.iter().map(Cube::model).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_field_has_ten_still_cubes() {
        let field = CubeField::default();
        assert_eq!(field.cubes().len(), 10);
        assert!(field.cubes().iter().all(|c| c.angle == 0.0));
        assert_eq!(field.spin(), Spin::Negative);
    }

    #[test]
    fn advance_follows_spin() {
        let mut field = CubeField::default();
        field.advance();
        assert!(field.cubes().iter().all(|c| c.angle == -ROTATION_STEP));

        field.flip_spin();
        field.advance();
        field.advance();
        assert!(field.cubes().iter().all(|c| (c.angle - ROTATION_STEP).abs() < 1e-6));
    }

    #[test]
    fn model_places_cube_at_its_position() {
        let cube = Cube { position: Vec3::new(2.0, 5.0, -15.0), angle: 1.0 };
        let center = cube.model().transform_point3(Vec3::ZERO);
        assert!((center - cube.position).length() < 1e-5);
    }

    #[test]
    fn rotation_preserves_the_axis() {
        let cube = Cube { position: Vec3::ZERO, angle: 0.7 };
        let axis = ROTATION_AXIS.normalize();
        let rotated = cube.model().transform_vector3(axis);
        assert!((rotated - axis).length() < 1e-5);
    }
}
