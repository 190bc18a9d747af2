//! Mesh data for the ground plane.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Standard interleaved vertex: position, normal, and UV coordinates.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Unit surface normal.
    pub normal: [f32; 3],
    /// Texture coordinates.
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(Vertex, [u8; 32]);

/// An indexed quad mesh lying on the ground.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneMesh {
    /// Interleaved vertex data.
    pub vertices: Vec<Vertex>,
    /// Triangle list indices, counter-clockwise seen from above.
    pub indices: Vec<u32>,
}

impl PlaneMesh {
    /// Number of indices to draw.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// A square plane on `y = 0` spanning `[-half_extent, half_extent]` on X
/// and Z, with +Y normals and corner-to-corner UVs.
#[must_use]
pub fn ground_plane(half_extent: f32) -> PlaneMesh {
    let h = half_extent;
    let normal = [0.0, 1.0, 0.0];
    let vertices = vec![
        Vertex {
            position: [-h, 0.0, h],
            normal,
            uv: [0.0, 0.0],
        },
        Vertex {
            position: [h, 0.0, h],
            normal,
            uv: [1.0, 0.0],
        },
        Vertex {
            position: [h, 0.0, -h],
            normal,
            uv: [1.0, 1.0],
        },
        Vertex {
            position: [-h, 0.0, -h],
            normal,
            uv: [0.0, 1.0],
        },
    ];
    let indices = vec![0, 1, 2, 0, 2, 3];
    PlaneMesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_stride_is_32_bytes() {
        // position (f32×3) + normal (f32×3) + uv (f32×2)
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }

    #[test]
    fn test_plane_has_one_quad() {
        let plane = ground_plane(5.0);
        assert_eq!(plane.vertices.len(), 4);
        assert_eq!(plane.indices.len(), 6);
        assert_eq!(plane.index_count(), 6);
    }

    #[test]
    fn test_plane_spans_half_extent_on_ground() {
        let plane = ground_plane(5.0);
        for v in &plane.vertices {
            assert_eq!(v.position[1], 0.0);
            assert!((v.position[0].abs() - 5.0).abs() < 1e-6);
            assert!((v.position[2].abs() - 5.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_plane_normals_point_up() {
        let plane = ground_plane(2.0);
        for v in &plane.vertices {
            assert_eq!(v.normal, [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn test_plane_uvs_cover_unit_square() {
        let plane = ground_plane(3.0);
        let uvs: Vec<[f32; 2]> = plane.vertices.iter().map(|v| v.uv).collect();
        for corner in [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]] {
            assert!(uvs.contains(&corner));
        }
    }

    #[test]
    fn test_indices_in_range() {
        let plane = ground_plane(1.0);
        for &i in &plane.indices {
            assert!((i as usize) < plane.vertices.len());
        }
    }

    #[test]
    fn test_winding_counter_clockwise_from_above() {
        let plane = ground_plane(4.0);
        for tri in plane.indices.chunks(3) {
            let a = Vec3::from_array(plane.vertices[tri[0] as usize].position);
            let b = Vec3::from_array(plane.vertices[tri[1] as usize].position);
            let c = Vec3::from_array(plane.vertices[tri[2] as usize].position);
            let face_normal = (b - a).cross(c - a);
            assert!(face_normal.y > 0.0, "triangle {tri:?} winds clockwise");
        }
    }

    #[test]
    fn test_vertices_cast_to_bytes() {
        let plane = ground_plane(1.0);
        let bytes: &[u8] = bytemuck::cast_slice(&plane.vertices);
        assert_eq!(bytes.len(), plane.vertices.len() * 32);
    }
}
