//! Validated solid primitives.
//!
//! All primitives reject non-positive dimensions with
//! [`GeometryError::DegeneratePrimitive`] so that degenerate parameters
//! surface before any boolean work happens. Curved surfaces are emitted as
//! triangles; only provably planar quads stay quads.

use std::f64::consts::TAU;

use nalgebra::{Point3, Vector3};
use tracing::debug;

use crate::error::GeometryError;
use crate::polygon::{Polygon, Vertex};
use crate::solid::Solid;
use crate::EPSILON;

fn require_positive(
    primitive: &'static str,
    name: &str,
    value: f64,
) -> Result<(), GeometryError> {
    if !value.is_finite() || value <= EPSILON {
        return Err(GeometryError::DegeneratePrimitive {
            primitive,
            reason: format!("{name} must be positive, got {value}"),
        });
    }
    Ok(())
}

fn require_segments(primitive: &'static str, segments: usize) -> Result<(), GeometryError> {
    if segments < 3 {
        return Err(GeometryError::DegeneratePrimitive {
            primitive,
            reason: format!("need at least 3 segments, got {segments}"),
        });
    }
    Ok(())
}

/// Build a flat-shaded face: vertex normals are the face plane normal.
/// Returns `None` for degenerate (collinear) corner sets, which are skipped.
fn face(points: &[Point3<f64>]) -> Option<Polygon> {
    let vertices: Vec<Vertex> = points
        .iter()
        .map(|p| Vertex::new(*p, Vector3::z()))
        .collect();
    let mut poly = Polygon::new(vertices)?;
    let normal = poly.plane.normal;
    for v in &mut poly.vertices {
        v.normal = normal;
    }
    Some(poly)
}

/// Cylinder along the Z axis, centered at the origin.
pub fn cylinder(radius: f64, height: f64, segments: usize) -> Result<Solid, GeometryError> {
    require_positive("cylinder", "radius", radius)?;
    require_positive("cylinder", "height", height)?;
    require_segments("cylinder", segments)?;

    let half = height / 2.0;
    let ring: Vec<(f64, f64)> = (0..segments)
        .map(|i| {
            let a = i as f64 / segments as f64 * TAU;
            (a.cos(), a.sin())
        })
        .collect();

    let mut polygons = Vec::with_capacity(segments * 3);
    for i in 0..segments {
        let (c0, s0) = ring[i];
        let (c1, s1) = ring[(i + 1) % segments];
        let b0 = Point3::new(radius * c0, radius * s0, -half);
        let b1 = Point3::new(radius * c1, radius * s1, -half);
        let t0 = Point3::new(radius * c0, radius * s0, half);
        let t1 = Point3::new(radius * c1, radius * s1, half);

        // Side rectangle, outward winding.
        if let Some(p) = face(&[b0, b1, t1, t0]) {
            polygons.push(p);
        }
        // Cap fans, seen from outside: bottom winds clockwise in XY.
        if let Some(p) = face(&[Point3::new(0.0, 0.0, -half), b1, b0]) {
            polygons.push(p);
        }
        if let Some(p) = face(&[Point3::new(0.0, 0.0, half), t0, t1]) {
            polygons.push(p);
        }
    }

    debug!(radius, height, segments, "cylinder primitive");
    Solid::from_polygons(polygons)
}

/// Revolve a closed profile polyline around the Z axis.
///
/// The profile lives in the `(radial, z)` half-plane and must wind
/// counter-clockwise (radial as x, z as y) for outward normals. Curved
/// panels are emitted as triangle pairs.
pub fn lathe(profile: &[(f64, f64)], segments: usize) -> Result<Solid, GeometryError> {
    require_segments("lathe", segments)?;
    if profile.len() < 3 {
        return Err(GeometryError::DegeneratePrimitive {
            primitive: "lathe",
            reason: format!("profile needs at least 3 points, got {}", profile.len()),
        });
    }
    for &(r, _) in profile {
        if !r.is_finite() || r < 0.0 {
            return Err(GeometryError::DegeneratePrimitive {
                primitive: "lathe",
                reason: format!("profile radius must be non-negative, got {r}"),
            });
        }
    }

    let station = |i: usize, k: usize| -> Point3<f64> {
        let (r, z) = profile[i % profile.len()];
        let a = (k % segments) as f64 / segments as f64 * TAU;
        Point3::new(r * a.cos(), r * a.sin(), z)
    };

    let mut polygons = Vec::with_capacity(profile.len() * segments * 2);
    for i in 0..profile.len() {
        for k in 0..segments {
            let p00 = station(i, k);
            let p01 = station(i, k + 1);
            let p11 = station(i + 1, k + 1);
            let p10 = station(i + 1, k);
            if let Some(t) = face(&[p00, p01, p11]) {
                polygons.push(t);
            }
            if let Some(t) = face(&[p00, p11, p10]) {
                polygons.push(t);
            }
        }
    }

    if polygons.is_empty() {
        return Err(GeometryError::DegeneratePrimitive {
            primitive: "lathe",
            reason: "profile produced no surface".to_string(),
        });
    }
    debug!(
        profile_points = profile.len(),
        segments,
        polygons = polygons.len(),
        "lathe primitive"
    );
    Solid::from_polygons(polygons)
}

/// Torus around the Z axis: `tube_radius` is the cross-section radius,
/// `major_radius` the centerline radius. The hole axis is Z.
pub fn torus(
    tube_radius: f64,
    major_radius: f64,
    ring_segments: usize,
    tube_segments: usize,
) -> Result<Solid, GeometryError> {
    require_positive("torus", "tube radius", tube_radius)?;
    require_positive("torus", "major radius", major_radius)?;
    require_segments("torus", ring_segments)?;
    require_segments("torus", tube_segments)?;
    if major_radius <= tube_radius {
        return Err(GeometryError::DegeneratePrimitive {
            primitive: "torus",
            reason: format!(
                "major radius {major_radius} must exceed tube radius {tube_radius}"
            ),
        });
    }

    // Circular cross-section, CCW in the (radial, z) plane.
    let profile: Vec<(f64, f64)> = (0..tube_segments)
        .map(|i| {
            let a = i as f64 / tube_segments as f64 * TAU;
            (major_radius + tube_radius * a.cos(), tube_radius * a.sin())
        })
        .collect();
    lathe(&profile, ring_segments)
}

/// Axis-aligned box centered at the origin.
pub fn cuboid(width: f64, depth: f64, height: f64) -> Result<Solid, GeometryError> {
    require_positive("cuboid", "width", width)?;
    require_positive("cuboid", "depth", depth)?;
    require_positive("cuboid", "height", height)?;

    let (hx, hy, hz) = (width / 2.0, depth / 2.0, height / 2.0);
    let p = |sx: f64, sy: f64, sz: f64| Point3::new(sx * hx, sy * hy, sz * hz);

    let faces = [
        // -Z and +Z
        [p(-1., -1., -1.), p(-1., 1., -1.), p(1., 1., -1.), p(1., -1., -1.)],
        [p(-1., -1., 1.), p(1., -1., 1.), p(1., 1., 1.), p(-1., 1., 1.)],
        // -Y and +Y
        [p(-1., -1., -1.), p(1., -1., -1.), p(1., -1., 1.), p(-1., -1., 1.)],
        [p(-1., 1., -1.), p(-1., 1., 1.), p(1., 1., 1.), p(1., 1., -1.)],
        // -X and +X
        [p(-1., -1., -1.), p(-1., -1., 1.), p(-1., 1., 1.), p(-1., 1., -1.)],
        [p(1., -1., -1.), p(1., 1., -1.), p(1., 1., 1.), p(1., -1., 1.)],
    ];

    let polygons = faces.iter().filter_map(|f| face(f)).collect();
    Solid::from_polygons(polygons)
}

/// Regular tetrahedron-like placeholder: four triangles, always watertight.
/// This is the fallback shape substituted when ring construction fails.
pub fn tetrahedron(size: f64) -> Result<Solid, GeometryError> {
    require_positive("tetrahedron", "size", size)?;

    let s = size / 2.0;
    let a = Point3::new(s, s, s);
    let b = Point3::new(s, -s, -s);
    let c = Point3::new(-s, s, -s);
    let d = Point3::new(-s, -s, s);

    let polygons = [[a, b, c], [a, d, b], [a, c, d], [b, d, c]]
        .iter()
        .filter_map(|f| face(f))
        .collect();
    Solid::from_polygons(polygons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn max_radius_xy(solid: &Solid) -> f64 {
        solid
            .polygons()
            .iter()
            .flat_map(|p| &p.vertices)
            .map(|v| (v.position.x * v.position.x + v.position.y * v.position.y).sqrt())
            .fold(0.0, f64::max)
    }

    #[test]
    fn cylinder_face_count() {
        let solid = cylinder(1.0, 2.0, 16).unwrap();
        // 16 side quads + 16 bottom + 16 top fan triangles.
        assert_eq!(solid.polygon_count(), 48);
        assert_relative_eq!(max_radius_xy(&solid), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn cylinder_rejects_degenerate_dimensions() {
        assert!(cylinder(0.0, 2.0, 16).is_err());
        assert!(cylinder(1.0, -2.0, 16).is_err());
        assert!(cylinder(1.0, 2.0, 2).is_err());
        assert!(cylinder(f64::NAN, 2.0, 16).is_err());
    }

    #[test]
    fn torus_dimensions() {
        let solid = torus(1.0, 5.0, 32, 16).unwrap();
        assert_relative_eq!(max_radius_xy(&solid), 6.0, epsilon = 1e-9);
        let max_z = solid
            .polygons()
            .iter()
            .flat_map(|p| &p.vertices)
            .map(|v| v.position.z)
            .fold(f64::MIN, f64::max);
        assert_relative_eq!(max_z, 1.0, epsilon = 1e-9);
        // Two triangles per grid cell.
        assert_eq!(solid.polygon_count(), 32 * 16 * 2);
    }

    #[test]
    fn torus_rejects_self_intersection() {
        assert!(torus(3.0, 2.0, 16, 8).is_err());
    }

    #[test]
    fn lathe_rejects_negative_radius() {
        assert!(lathe(&[(-1.0, 0.0), (1.0, 0.0), (1.0, 1.0)], 8).is_err());
    }

    #[test]
    fn cuboid_has_six_faces() {
        let solid = cuboid(2.0, 3.0, 4.0).unwrap();
        assert_eq!(solid.polygon_count(), 6);
    }

    #[test]
    fn cuboid_outward_normals() {
        let solid = cuboid(2.0, 2.0, 2.0).unwrap();
        for poly in solid.polygons() {
            // Center of each face points the same way as its normal.
            let centroid = poly
                .vertices
                .iter()
                .fold(Vector3::zeros(), |acc, v| acc + v.position.coords)
                / poly.vertices.len() as f64;
            assert!(poly.plane.normal.dot(&centroid) > 0.0);
        }
    }

    #[test]
    fn tetrahedron_is_four_triangles() {
        let solid = tetrahedron(1.0).unwrap();
        assert_eq!(solid.polygon_count(), 4);
        for poly in solid.polygons() {
            assert_eq!(poly.vertices.len(), 3);
        }
    }

    #[test]
    fn tetrahedron_outward_normals() {
        let solid = tetrahedron(2.0).unwrap();
        for poly in solid.polygons() {
            let centroid = poly
                .vertices
                .iter()
                .fold(Vector3::zeros(), |acc, v| acc + v.position.coords)
                / 3.0;
            assert!(poly.plane.normal.dot(&centroid) > 0.0);
        }
    }
}
