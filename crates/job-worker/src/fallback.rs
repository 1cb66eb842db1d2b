//! Placeholder geometry substituted when ring construction fails.

use solid_kernel::{tetrahedron, Solid};

/// Edge length of the placeholder tetrahedron's bounding cube, in mm.
const FALLBACK_SIZE_MM: f64 = 2.0;

/// A minimal always-valid solid: four triangles, watertight.
///
/// The pipeline guarantees *some* well-formed mesh file for every job; a
/// job that falls back is reported as degraded, never as failed.
pub fn fallback_solid() -> Solid {
    tetrahedron(FALLBACK_SIZE_MM).expect("constant-size tetrahedron is always valid")
}
