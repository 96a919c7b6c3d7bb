use glam::Vec3;
use rubiks_core::FaceColors;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Clone)]
pub struct MeshData {
    /// 9 floats per vertex: position(3) + normal(3) + color(3)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 9
    }
}

/// Lines mesh: interleaved [pos.x, pos.y, pos.z, r, g, b, a]
pub struct LineMeshData {
    /// 7 floats per vertex: position(3) + color(4)
    pub vertices: Vec<f32>,
}

/// Build the unit cube for one piece, each face colored with its sticker.
///
/// Face order follows the sticker slot order [+X, -X, +Y, -Y, +Z, -Z];
/// positions span ±0.5 so the piece scale and spacing live entirely in the
/// model transform.
pub fn piece_mesh(colors: &FaceColors) -> MeshData {
    let h = 0.5;

    let faces: [([Vec3; 4], Vec3); 6] = [
        // Right (+X)
        (
            [
                Vec3::new(h, -h, h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, h, -h),
                Vec3::new(h, h, h),
            ],
            Vec3::X,
        ),
        // Left (-X)
        (
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, -h, h),
                Vec3::new(-h, h, h),
                Vec3::new(-h, h, -h),
            ],
            Vec3::NEG_X,
        ),
        // Top (+Y)
        (
            [
                Vec3::new(-h, h, h),
                Vec3::new(h, h, h),
                Vec3::new(h, h, -h),
                Vec3::new(-h, h, -h),
            ],
            Vec3::Y,
        ),
        // Bottom (-Y)
        (
            [
                Vec3::new(-h, -h, -h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, -h, h),
                Vec3::new(-h, -h, h),
            ],
            Vec3::NEG_Y,
        ),
        // Front (+Z)
        (
            [
                Vec3::new(-h, -h, h),
                Vec3::new(h, -h, h),
                Vec3::new(h, h, h),
                Vec3::new(-h, h, h),
            ],
            Vec3::Z,
        ),
        // Back (-Z)
        (
            [
                Vec3::new(h, -h, -h),
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, h, -h),
                Vec3::new(h, h, -h),
            ],
            Vec3::NEG_Z,
        ),
    ];

    let mut vertices = Vec::with_capacity(24 * 9);
    let mut indices = Vec::with_capacity(36);

    for (face, (quad, normal)) in faces.iter().enumerate() {
        let color = colors[face];
        let base = (vertices.len() / 9) as u32;
        for v in quad {
            vertices.extend_from_slice(&[
                v.x, v.y, v.z, normal.x, normal.y, normal.z, color[0], color[1], color[2],
            ]);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// Ground grid lines on the XZ plane below the cube
pub fn grid(range: i32, size: f32, opacity: f32) -> LineMeshData {
    let mut vertices = Vec::new();
    let color = [0.45_f32, 0.45, 0.5, opacity];
    let extent = range as f32 * size;
    let y = -2.0;

    for i in -range..=range {
        let offset = i as f32 * size;
        push_line_vert(&mut vertices, -extent, y, offset, color);
        push_line_vert(&mut vertices, extent, y, offset, color);
        push_line_vert(&mut vertices, offset, y, -extent, color);
        push_line_vert(&mut vertices, offset, y, extent, color);
    }

    LineMeshData { vertices }
}

/// World axis lines from the origin
pub fn axes(length: f32) -> LineMeshData {
    let mut vertices = Vec::new();

    let red = [0.9_f32, 0.2, 0.2, 1.0];
    let green = [0.2_f32, 0.8, 0.2, 1.0];
    let blue = [0.2_f32, 0.3, 0.9, 1.0];

    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, red);
    push_line_vert(&mut vertices, length, 0.0, 0.0, red);
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, green);
    push_line_vert(&mut vertices, 0.0, length, 0.0, green);
    push_line_vert(&mut vertices, 0.0, 0.0, 0.0, blue);
    push_line_vert(&mut vertices, 0.0, 0.0, length, blue);

    LineMeshData { vertices }
}

fn push_line_vert(v: &mut Vec<f32>, px: f32, py: f32, pz: f32, c: [f32; 4]) {
    v.extend_from_slice(&[px, py, pz, c[0], c[1], c[2], c[3]]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rubiks_core::{CubeState, FACE_COUNT};
    use glam::IVec3;

    #[test]
    fn piece_mesh_has_a_quad_per_face() {
        let state = CubeState::default();
        let colors = state.face_colors(0).unwrap();
        let mesh = piece_mesh(colors);

        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.indices.len(), 36);
    }

    #[test]
    fn face_vertex_colors_follow_sticker_slots() {
        let mut colors: FaceColors = [[0.0; 3]; FACE_COUNT];
        for (face, color) in colors.iter_mut().enumerate() {
            *color = [face as f32 * 0.1, 0.0, 0.0];
        }
        let mesh = piece_mesh(&colors);

        for face in 0..FACE_COUNT {
            for vertex in 0..4 {
                let base = (face * 4 + vertex) * 9;
                assert!((mesh.vertices[base + 6] - face as f32 * 0.1).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn face_normals_point_along_slot_axes() {
        let state = CubeState::default();
        let id = state.id_at(IVec3::new(1, 1, 1)).unwrap();
        let mesh = piece_mesh(state.face_colors(id).unwrap());

        let expected = [
            Vec3::X,
            Vec3::NEG_X,
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::Z,
            Vec3::NEG_Z,
        ];
        for (face, normal) in expected.iter().enumerate() {
            let base = face * 4 * 9;
            let got = Vec3::new(
                mesh.vertices[base + 3],
                mesh.vertices[base + 4],
                mesh.vertices[base + 5],
            );
            assert_eq!(got, *normal);
        }
    }

    #[test]
    fn grid_and_axes_vertex_layout() {
        let g = grid(2, 1.0, 0.5);
        // (2*range + 1) lines each way, 2 verts per line, 7 floats per vert.
        assert_eq!(g.vertices.len(), 5 * 4 * 7);

        let a = axes(1.5);
        assert_eq!(a.vertices.len(), 6 * 7);
    }
}
