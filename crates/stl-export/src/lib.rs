//! Binary STL serialization for [`TriangleMesh`].
//!
//! Binary STL layout:
//! - 80 bytes: header
//! - 4 bytes: u32 LE triangle count
//! - Per triangle (50 bytes each):
//!   - 12 bytes: normal vector (3 × f32 LE)
//!   - 36 bytes: 3 vertices (3 × 3 × f32 LE)
//!   - 2 bytes: attribute byte count (0u16)
//!
//! Output is byte-for-byte deterministic for a given mesh: triangle order
//! follows the index buffer and face normals are recomputed from vertex
//! positions, never taken from the (rendering-oriented) vertex normals.
//! Only the binary variant exists; ASCII STL is not supported.

use solid_kernel::TriangleMesh;

/// MIME type of the serialized artifact.
pub const STL_MIME_TYPE: &str = "model/stl";

const HEADER_TEXT: &[u8] = b"parametric ring mesh";

/// Errors from mesh serialization.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StlError {
    #[error("mesh has no triangles")]
    EmptyMesh,

    #[error("index {index} out of range (vertex count = {vertex_count})")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

/// Serialize a mesh to binary STL bytes.
pub fn mesh_to_binary_stl(mesh: &TriangleMesh) -> Result<Vec<u8>, StlError> {
    let tri_count = mesh.triangle_count();
    if tri_count == 0 {
        return Err(StlError::EmptyMesh);
    }

    let vertex_count = mesh.vertex_count();
    for &index in &mesh.indices {
        if index as usize >= vertex_count {
            return Err(StlError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }
    }

    let mut buf = Vec::with_capacity(84 + tri_count * 50);

    // 80-byte header, zero-padded.
    buf.extend_from_slice(HEADER_TEXT);
    buf.resize(80, 0u8);

    // Triangle count (u32 LE).
    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for tri in mesh.indices.chunks_exact(3) {
        let v0 = vertex(mesh, tri[0]);
        let v1 = vertex(mesh, tri[1]);
        let v2 = vertex(mesh, tri[2]);

        // Face normal from the cross product of the edges.
        let e1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
        let e2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
        let nx = e1[1] * e2[2] - e1[2] * e2[1];
        let ny = e1[2] * e2[0] - e1[0] * e2[2];
        let nz = e1[0] * e2[1] - e1[1] * e2[0];
        let len = (nx * nx + ny * ny + nz * nz).sqrt();
        let normal = if len > 1e-12 {
            [nx / len, ny / len, nz / len]
        } else {
            [0.0, 0.0, 0.0]
        };

        for c in &normal {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        for v in [v0, v1, v2] {
            for c in &v {
                buf.extend_from_slice(&c.to_le_bytes());
            }
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}

fn vertex(mesh: &TriangleMesh, index: u32) -> [f32; 3] {
    let i = index as usize * 3;
    [
        mesh.positions[i],
        mesh.positions[i + 1],
        mesh.positions[i + 2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_mesh() -> TriangleMesh {
        TriangleMesh {
            positions: vec![
                0.0, 0.0, 0.0, // v0
                1.0, 0.0, 0.0, // v1
                0.0, 1.0, 0.0, // v2
            ],
            normals: vec![0.0; 9],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn empty_mesh_is_rejected() {
        let mesh = TriangleMesh::new();
        assert!(matches!(
            mesh_to_binary_stl(&mesh),
            Err(StlError::EmptyMesh)
        ));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut mesh = triangle_mesh();
        mesh.indices = vec![0, 1, 9];
        assert!(matches!(
            mesh_to_binary_stl(&mesh),
            Err(StlError::IndexOutOfRange { index: 9, .. })
        ));
    }

    #[test]
    fn single_triangle_layout() {
        let stl = mesh_to_binary_stl(&triangle_mesh()).unwrap();
        // 84 header + 1 * 50.
        assert_eq!(stl.len(), 134);
        assert!(stl[..20].starts_with(b"parametric ring mesh"));
        assert_eq!(u32::from_le_bytes([stl[80], stl[81], stl[82], stl[83]]), 1);

        // Normal is (0, 0, 1): cross of (1,0,0) and (0,1,0).
        let nz = f32::from_le_bytes([stl[92], stl[93], stl[94], stl[95]]);
        assert!((nz - 1.0).abs() < 1e-6);

        // Attribute byte count closes the record.
        assert_eq!(&stl[132..134], &[0, 0]);
    }

    #[test]
    fn file_length_is_exactly_84_plus_50_per_triangle() {
        let mesh = solid_kernel::cuboid(1.0, 2.0, 3.0).unwrap().to_mesh();
        let stl = mesh_to_binary_stl(&mesh).unwrap();
        assert_eq!(stl.len(), 84 + mesh.triangle_count() * 50);
        let count = u32::from_le_bytes([stl[80], stl[81], stl[82], stl[83]]);
        assert_eq!(count as usize, mesh.triangle_count());
    }

    #[test]
    fn serialization_is_deterministic() {
        let mesh = solid_kernel::tetrahedron(2.0).unwrap().to_mesh();
        let a = mesh_to_binary_stl(&mesh).unwrap();
        let b = mesh_to_binary_stl(&mesh).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_triangle_gets_zero_normal() {
        let mesh = TriangleMesh {
            positions: vec![0.0; 9],
            normals: vec![0.0; 9],
            indices: vec![0, 1, 2],
        };
        let stl = mesh_to_binary_stl(&mesh).unwrap();
        for i in 0..3 {
            let b = 84 + i * 4;
            let c = f32::from_le_bytes([stl[b], stl[b + 1], stl[b + 2], stl[b + 3]]);
            assert_eq!(c, 0.0);
        }
    }
}
