//! UV-sphere geometry for the globe.
//!
//! Vertex positions and texture coordinates come from the same projection
//! convention as marker placement (`geo::projection`), so the texture seam
//! and markers always agree. The seam column is duplicated to give the last
//! quad ring proper texture coordinates.

use bytemuck::{Pod, Zeroable};

use crate::geo::projection;

/// One globe vertex: unit-sphere position plus texture coordinates.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct GlobeVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// CPU-side sphere geometry, ready for GL upload.
pub struct SphereMesh {
    pub vertices: Vec<GlobeVertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    pub fn index_count(&self) -> i32 {
        self.indices.len() as i32
    }
}

/// Builds a unit-radius UV sphere with `rings` latitude bands and
/// `segments` longitude bands.
pub fn build_sphere_mesh(rings: u32, segments: u32) -> SphereMesh {
    assert!(rings >= 2 && segments >= 3, "degenerate sphere resolution");

    let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);

    // Rows run north pole (i=0) to south pole (i=rings); columns run
    // west (-180°, j=0) to east (+180°, j=segments, seam duplicate).
    for i in 0..=rings {
        let lat = 90.0 - 180.0 * (i as f64 / rings as f64);
        for j in 0..=segments {
            let lon = -180.0 + 360.0 * (j as f64 / segments as f64);
            let p = projection::project(lon, lat, 1.0);
            let (u, v) = projection::uv(lon, lat);
            vertices.push(GlobeVertex {
                position: [p.x as f32, p.y as f32, p.z as f32],
                uv: [u, v],
            });
        }
    }

    let columns = segments + 1;
    let idx = |i: u32, j: u32| -> u32 { i * columns + j };

    // Two CCW-outward triangles per quad.
    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
    for i in 0..rings {
        for j in 0..segments {
            let a = idx(i, j);
            let b = idx(i + 1, j);
            let c = idx(i, j + 1);
            let d = idx(i + 1, j + 1);

            indices.extend_from_slice(&[a, b, c]);
            indices.extend_from_slice(&[b, d, c]);
        }
    }

    SphereMesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_and_index_counts() {
        let mesh = build_sphere_mesh(32, 64);
        assert_eq!(mesh.vertices.len(), 33 * 65);
        assert_eq!(mesh.indices.len(), 32 * 64 * 6);
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        let mesh = build_sphere_mesh(16, 32);
        for v in &mesh.vertices {
            let [x, y, z] = v.position;
            let len = (x * x + y * y + z * z).sqrt();
            assert!((len - 1.0).abs() < 1e-5, "vertex off unit sphere: {}", len);
        }
    }

    #[test]
    fn test_indices_in_range() {
        let mesh = build_sphere_mesh(8, 12);
        let max = *mesh.indices.iter().max().unwrap();
        assert!((max as usize) < mesh.vertices.len());
    }

    #[test]
    fn test_seam_columns_coincide_in_space_not_in_uv() {
        let rings = 8;
        let segments = 12;
        let mesh = build_sphere_mesh(rings, segments);
        let columns = (segments + 1) as usize;

        // Equator row: west edge and east edge are the same point on the
        // sphere but carry u=0 and u=1 respectively.
        let row = (rings / 2) as usize * columns;
        let west = mesh.vertices[row];
        let east = mesh.vertices[row + segments as usize];

        for k in 0..3 {
            assert!((west.position[k] - east.position[k]).abs() < 1e-5);
        }
        assert!((west.uv[0] - 0.0).abs() < 1e-6);
        assert!((east.uv[0] - 1.0).abs() < 1e-6);
    }
}
