use bytemuck::{Pod, Zeroable};

/// Cube vertex: object-space position and texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CubeVertex {
    pub pos: [f32; 3],
    pub uv: [f32; 2],
}

impl CubeVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // pos
        1 => Float32x2  // uv
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CubeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const fn v(x: f32, y: f32, z: f32, u: f32, t: f32) -> CubeVertex {
    CubeVertex { pos: [x, y, z], uv: [u, t] }
}

/// Unit cube centred on the origin, six vertices per face (back, front, left,
/// right, bottom, top).
pub const CUBE_VERTICES: [CubeVertex; 36] = [
    v(-0.5, -0.5, -0.5, 0.0, 0.0),
    v( 0.5, -0.5, -0.5, 1.0, 0.0),
    v( 0.5,  0.5, -0.5, 1.0, 1.0),
    v( 0.5,  0.5, -0.5, 1.0, 1.0),
    v(-0.5,  0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5, -0.5, 0.0, 0.0),

    v(-0.5, -0.5,  0.5, 0.0, 0.0),
    v( 0.5, -0.5,  0.5, 1.0, 0.0),
    v( 0.5,  0.5,  0.5, 1.0, 1.0),
    v( 0.5,  0.5,  0.5, 1.0, 1.0),
    v(-0.5,  0.5,  0.5, 0.0, 1.0),
    v(-0.5, -0.5,  0.5, 0.0, 0.0),

    v(-0.5,  0.5,  0.5, 1.0, 0.0),
    v(-0.5,  0.5, -0.5, 1.0, 1.0),
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    v(-0.5, -0.5,  0.5, 0.0, 0.0),
    v(-0.5,  0.5,  0.5, 1.0, 0.0),

    v( 0.5,  0.5,  0.5, 1.0, 0.0),
    v( 0.5,  0.5, -0.5, 1.0, 1.0),
    v( 0.5, -0.5, -0.5, 0.0, 1.0),
    v( 0.5, -0.5, -0.5, 0.0, 1.0),
    v( 0.5, -0.5,  0.5, 0.0, 0.0),
    v( 0.5,  0.5,  0.5, 1.0, 0.0),

    v(-0.5, -0.5, -0.5, 0.0, 1.0),
    v( 0.5, -0.5, -0.5, 1.0, 1.0),
    v( 0.5, -0.5,  0.5, 1.0, 0.0),
    v( 0.5, -0.5,  0.5, 1.0, 0.0),
    v(-0.5, -0.5,  0.5, 0.0, 0.0),
    v(-0.5, -0.5, -0.5, 0.0, 1.0),

    v(-0.5,  0.5, -0.5, 0.0, 1.0),
    v( 0.5,  0.5, -0.5, 1.0, 1.0),
    v( 0.5,  0.5,  0.5, 1.0, 0.0),
    v( 0.5,  0.5,  0.5, 1.0, 0.0),
    v(-0.5,  0.5,  0.5, 0.0, 0.0),
    v(-0.5,  0.5, -0.5, 0.0, 1.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_lie_on_the_unit_cube() {
        for vert in CUBE_VERTICES {
            assert!(vert.pos.iter().all(|c| c.abs() == 0.5));
            assert!(vert.uv.iter().all(|t| (0.0..=1.0).contains(t)));
        }
    }

    #[test]
    fn each_face_is_planar_on_one_axis() {
        for face in CUBE_VERTICES.chunks(6) {
            let shared_axis = (0..3).find(|&axis| {
                face.iter().all(|vert| vert.pos[axis] == face[0].pos[axis])
            });
            assert!(shared_axis.is_some());
        }
    }

    #[test]
    fn faces_cover_all_six_sides() {
        let mut sides = Vec::new();
        for face in CUBE_VERTICES.chunks(6) {
            for axis in 0..3 {
                if face.iter().all(|vert| vert.pos[axis] == face[0].pos[axis]) {
                    sides.push((axis, face[0].pos[axis] > 0.0));
                }
            }
        }
        sides.sort();
        sides.dedup();
        assert_eq!(sides.len(), 6);
    }
}
