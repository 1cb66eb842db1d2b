use nalgebra::{Point3, Vector3};

use crate::plane::Plane;

/// A polygon corner: position plus outward surface normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f64>,
    pub normal: Vector3<f64>,
}

impl Vertex {
    pub fn new(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { position, normal }
    }

    /// Linear interpolation toward `other`, used when an edge crosses a
    /// clipping plane.
    pub fn interpolated(&self, other: &Vertex, t: f64) -> Vertex {
        Vertex {
            position: Point3::from(self.position.coords.lerp(&other.position.coords, t)),
            normal: self.normal.lerp(&other.normal, t),
        }
    }

    pub fn flip(&mut self) {
        self.normal = -self.normal;
    }
}

/// A convex planar polygon with outward-facing winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
    pub plane: Plane,
}

impl Polygon {
    /// Build a polygon from at least three vertices. The carrier plane is
    /// derived from the first three, so callers must supply CCW winding as
    /// seen from outside the solid.
    pub fn new(vertices: Vec<Vertex>) -> Option<Polygon> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(
            &vertices[0].position,
            &vertices[1].position,
            &vertices[2].position,
        )?;
        Some(Polygon { vertices, plane })
    }

    /// Reverse orientation: winding, vertex normals, and carrier plane.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        for v in &mut self.vertices {
            v.flip();
        }
        self.plane.flip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f64, y: f64, z: f64) -> Vertex {
        Vertex::new(Point3::new(x, y, z), Vector3::z())
    }

    #[test]
    fn plane_derived_from_winding() {
        let poly = Polygon::new(vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)])
            .unwrap();
        assert_relative_eq!(poly.plane.normal.z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(poly.plane.w, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_points_produce_no_polygon() {
        assert!(Polygon::new(vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(2.0, 0.0, 0.0)]).is_none());
    }

    #[test]
    fn flip_reverses_plane() {
        let mut poly =
            Polygon::new(vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)]).unwrap();
        poly.flip();
        assert_relative_eq!(poly.plane.normal.z, -1.0, epsilon = 1e-12);
        assert_relative_eq!(poly.vertices[0].normal.z, -1.0, epsilon = 1e-12);
    }
}
