use glam::Vec3;

/// Vertex layout shared by both instanced meshes.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Axis-aligned cube spanning [-0.5, 0.5] with per-face normals.
pub fn unit_cube() -> MeshData {
    // (normal, tangent u, tangent v) per face, with u x v == normal so the
    // corner order below winds counter-clockwise from outside.
    const FACES: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in FACES {
        let base = vertices.len() as u32;
        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            let position = normal * 0.5 + u * su + v * sv;
            vertices.push(Vertex {
                position: position.to_array(),
                normal: normal.to_array(),
            });
        }
        indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    MeshData { vertices, indices }
}

/// UV sphere of radius 0.5 centered on the origin.
pub fn unit_sphere(stacks: u32, sectors: u32) -> MeshData {
    let mut vertices = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);

    for i in 0..=stacks {
        let phi = std::f32::consts::FRAC_PI_2 - std::f32::consts::PI * i as f32 / stacks as f32;
        let (y, ring) = (phi.sin(), phi.cos());
        for j in 0..=sectors {
            let theta = std::f32::consts::TAU * j as f32 / sectors as f32;
            let normal = Vec3::new(ring * theta.cos(), y, ring * theta.sin());
            vertices.push(Vertex {
                position: (normal * 0.5).to_array(),
                normal: normal.to_array(),
            });
        }
    }

    let mut indices = Vec::new();
    for i in 0..stacks {
        for j in 0..sectors {
            let a = i * (sectors + 1) + j;
            let b = a + 1;
            let c = a + sectors + 1;
            let d = c + 1;
            if i != stacks - 1 {
                indices.extend([a, d, c]);
            }
            if i != 0 {
                indices.extend([a, b, d]);
            }
        }
    }

    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_four_vertices_per_face() {
        let cube = unit_cube();
        assert_eq!(cube.vertices.len(), 24);
        assert_eq!(cube.indices.len(), 36);
    }

    #[test]
    fn cube_indices_are_in_range() {
        let cube = unit_cube();
        assert!(cube.indices.iter().all(|&i| (i as usize) < cube.vertices.len()));
    }

    #[test]
    fn cube_corners_touch_the_half_unit_bounds() {
        let cube = unit_cube();
        for vertex in &cube.vertices {
            for c in vertex.position {
                assert!(c.abs() <= 0.5 + 1e-6);
            }
        }
    }

    #[test]
    fn sphere_vertices_sit_on_the_surface() {
        let sphere = unit_sphere(8, 12);
        for vertex in &sphere.vertices {
            let p = Vec3::from_array(vertex.position);
            assert!((p.length() - 0.5).abs() < 1e-5);
            let n = Vec3::from_array(vertex.normal);
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!((p * 2.0 - n).length() < 1e-5);
        }
    }

    #[test]
    fn sphere_index_count_matches_tessellation() {
        let (stacks, sectors) = (8u32, 12u32);
        let sphere = unit_sphere(stacks, sectors);
        let triangles = sectors * (2 * stacks - 2);
        assert_eq!(sphere.indices.len() as u32, triangles * 3);
        assert!(sphere.indices.iter().all(|&i| (i as usize) < sphere.vertices.len()));
    }
}
