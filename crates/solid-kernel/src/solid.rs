use nalgebra::{Rotation3, Vector3};
use tracing::debug;

use crate::bsp::BspNode;
use crate::error::GeometryError;
use crate::mesh::TriangleMesh;
use crate::polygon::Polygon;

/// A closed triangulatable boundary representation.
///
/// Solids are ephemeral: built fresh per generation request, combined,
/// tessellated, then dropped. Nothing here is shared between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    polygons: Vec<Polygon>,
}

impl Solid {
    pub fn from_polygons(polygons: Vec<Polygon>) -> Result<Solid, GeometryError> {
        if polygons.is_empty() {
            return Err(GeometryError::EmptySolid);
        }
        Ok(Solid { polygons })
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Boolean union of two solids.
    pub fn union(&self, other: &Solid) -> Result<Solid, GeometryError> {
        let mut a = BspNode::new(self.polygons.clone());
        let mut b = BspNode::new(other.polygons.clone());

        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(b.all_polygons());

        let polygons = a.all_polygons();
        debug!(
            left = self.polygons.len(),
            right = other.polygons.len(),
            result = polygons.len(),
            "boolean union"
        );
        Solid::from_polygons(polygons)
            .map_err(|_| GeometryError::EmptyResult { operation: "union" })
    }

    /// Boolean subtraction: `self` minus `other`.
    pub fn subtract(&self, other: &Solid) -> Result<Solid, GeometryError> {
        let mut a = BspNode::new(self.polygons.clone());
        let mut b = BspNode::new(other.polygons.clone());

        a.invert();
        a.clip_to(&b);
        b.clip_to(&a);
        b.invert();
        b.clip_to(&a);
        b.invert();
        a.build(b.all_polygons());
        a.invert();

        let polygons = a.all_polygons();
        debug!(
            left = self.polygons.len(),
            right = other.polygons.len(),
            result = polygons.len(),
            "boolean subtract"
        );
        Solid::from_polygons(polygons).map_err(|_| GeometryError::EmptyResult {
            operation: "subtract",
        })
    }

    /// Rigid translation.
    pub fn translated(&self, offset: Vector3<f64>) -> Solid {
        let polygons = self
            .polygons
            .iter()
            .map(|poly| {
                let mut poly = poly.clone();
                for v in &mut poly.vertices {
                    v.position += offset;
                }
                poly.plane.w += poly.plane.normal.dot(&offset);
                poly
            })
            .collect();
        Solid { polygons }
    }

    /// Rotation about the X axis, in degrees.
    pub fn rotated_x_deg(&self, degrees: f64) -> Solid {
        self.rotated(Rotation3::from_axis_angle(
            &Vector3::x_axis(),
            degrees.to_radians(),
        ))
    }

    /// Rotation about the Z axis, in degrees.
    pub fn rotated_z_deg(&self, degrees: f64) -> Solid {
        self.rotated(Rotation3::from_axis_angle(
            &Vector3::z_axis(),
            degrees.to_radians(),
        ))
    }

    fn rotated(&self, rotation: Rotation3<f64>) -> Solid {
        let polygons = self
            .polygons
            .iter()
            .map(|poly| {
                let mut poly = poly.clone();
                for v in &mut poly.vertices {
                    v.position = rotation * v.position;
                    v.normal = rotation * v.normal;
                }
                // Rotation preserves the plane offset.
                poly.plane.normal = rotation * poly.plane.normal;
                poly
            })
            .collect();
        Solid { polygons }
    }

    /// Deterministic fan triangulation into a flat-array mesh.
    pub fn to_mesh(&self) -> TriangleMesh {
        crate::mesh::triangulate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{cuboid, cylinder};
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn bounds(solid: &Solid) -> (Point3<f64>, Point3<f64>) {
        let mut min = Point3::new(f64::MAX, f64::MAX, f64::MAX);
        let mut max = Point3::new(f64::MIN, f64::MIN, f64::MIN);
        for poly in solid.polygons() {
            for v in &poly.vertices {
                for i in 0..3 {
                    min[i] = min[i].min(v.position[i]);
                    max[i] = max[i].max(v.position[i]);
                }
            }
        }
        (min, max)
    }

    #[test]
    fn union_of_disjoint_cubes_keeps_both() {
        let a = cuboid(1.0, 1.0, 1.0).unwrap();
        let b = cuboid(1.0, 1.0, 1.0)
            .unwrap()
            .translated(Vector3::new(5.0, 0.0, 0.0));
        let out = a.union(&b).unwrap();
        let (min, max) = bounds(&out);
        assert_relative_eq!(min.x, -0.5, epsilon = 1e-9);
        assert_relative_eq!(max.x, 5.5, epsilon = 1e-9);
    }

    #[test]
    fn union_of_overlapping_cubes_spans_both() {
        let a = cuboid(2.0, 2.0, 2.0).unwrap();
        let b = cuboid(2.0, 2.0, 2.0)
            .unwrap()
            .translated(Vector3::new(1.0, 0.0, 0.0));
        let out = a.union(&b).unwrap();
        let (min, max) = bounds(&out);
        assert_relative_eq!(min.x, -1.0, epsilon = 1e-9);
        assert_relative_eq!(max.x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(max.y, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn subtract_opens_a_hole() {
        let outer = cylinder(4.0, 2.0, 32).unwrap();
        let inner = cylinder(2.0, 3.0, 32).unwrap();
        let band = outer.subtract(&inner).unwrap();
        // No surviving vertex may sit inside the bore. The cutter is a
        // 32-gon prism, so its surface reaches inward to the apothem.
        let apothem = 2.0 * (std::f64::consts::PI / 32.0).cos();
        for poly in band.polygons() {
            for v in &poly.vertices {
                let r = (v.position.x * v.position.x + v.position.y * v.position.y).sqrt();
                assert!(r > apothem - 1e-6, "vertex inside bore at r = {r}");
            }
        }
    }

    #[test]
    fn subtract_consuming_everything_is_an_error() {
        let small = cuboid(1.0, 1.0, 1.0).unwrap();
        let big = cuboid(4.0, 4.0, 4.0).unwrap();
        let err = small.subtract(&big).unwrap_err();
        assert!(matches!(err, GeometryError::EmptyResult { .. }));
    }

    #[test]
    fn rotation_maps_axes() {
        let tall = cuboid(1.0, 1.0, 4.0).unwrap();
        let (_, max) = bounds(&tall.rotated_x_deg(90.0));
        // Height moves from Z onto Y.
        assert_relative_eq!(max.y, 2.0, epsilon = 1e-9);
        assert_relative_eq!(max.z, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn translation_moves_planes_with_vertices() {
        let cube = cuboid(1.0, 1.0, 1.0).unwrap();
        let moved = cube.translated(Vector3::new(0.0, 0.0, 3.0));
        for poly in moved.polygons() {
            let v = &poly.vertices[0];
            assert_relative_eq!(
                poly.plane.normal.dot(&v.position.coords),
                poly.plane.w,
                epsilon = 1e-9
            );
        }
    }
}
