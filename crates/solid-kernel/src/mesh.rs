//! Triangle-mesh output representation and tessellation.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::solid::Solid;

/// A flat-array triangle mesh, ready for rendering or serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Vertex positions `[x0, y0, z0, x1, y1, z1, ...]`.
    pub positions: Vec<f32>,
    /// Vertex normals `[nx0, ny0, nz0, ...]`.
    pub normals: Vec<f32>,
    /// Triangle indices into the vertex array.
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn add_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>) -> u32 {
        let idx = self.vertex_count() as u32;
        self.positions.push(position.x as f32);
        self.positions.push(position.y as f32);
        self.positions.push(position.z as f32);
        self.normals.push(normal.x as f32);
        self.normals.push(normal.y as f32);
        self.normals.push(normal.z as f32);
        idx
    }

    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }
}

/// Fan-triangulate every polygon of a solid, in polygon order.
///
/// Emission order is fully determined by the solid's polygon list, which
/// makes the mesh (and anything serialized from it) reproducible.
pub fn triangulate(solid: &Solid) -> TriangleMesh {
    let mut mesh = TriangleMesh::new();
    for poly in solid.polygons() {
        let base: Vec<u32> = poly
            .vertices
            .iter()
            .map(|v| mesh.add_vertex(v.position, v.normal))
            .collect();
        for i in 1..base.len() - 1 {
            mesh.add_triangle(base[0], base[i], base[i + 1]);
        }
    }
    mesh
}
