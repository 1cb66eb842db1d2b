//! Band construction: the part of the ring that wraps the finger.
//!
//! The finger axis is Z for every profile. Flat bands are cut from
//! concentric cylinders; comfort bands are a full torus; round bands are a
//! half-round (D-section) lathe with a flat inner wall.

use std::f64::consts::PI;

use ring_types::{BandProfile, DesignParameters};
use solid_kernel::{cylinder, lathe, torus, GeometryError, Solid};
use tracing::debug;

/// US ring-size to inner-diameter conversion: `11.6 + size * 0.83` mm.
/// These constants encode a real-world sizing standard; keep them exact.
pub const RING_SIZE_BASE_MM: f64 = 11.6;
pub const RING_SIZE_STEP_MM: f64 = 0.83;

/// Sweep resolution around the finger axis.
pub const RING_SEGMENTS: usize = 64;
/// Resolution of the tube cross-section.
pub const TUBE_SEGMENTS: usize = 32;

/// Extra cutter length so the bore subtraction never leaves coplanar skin.
const CUT_CLEARANCE_MM: f64 = 0.2;

pub fn inner_diameter_mm(ring_size: f64) -> f64 {
    RING_SIZE_BASE_MM + ring_size * RING_SIZE_STEP_MM
}

pub fn inner_radius_mm(ring_size: f64) -> f64 {
    inner_diameter_mm(ring_size) / 2.0
}

/// Radial half-thickness of the band; also the torus tube radius.
pub fn tube_radius_mm(band_width: f64) -> f64 {
    band_width / 2.0
}

/// Centerline radius of the comfort band's torus.
pub fn major_radius_mm(ring_size: f64, band_width: f64) -> f64 {
    inner_radius_mm(ring_size) + tube_radius_mm(band_width)
}

/// Build the band for the requested profile.
pub fn build_band(params: &DesignParameters) -> Result<Solid, GeometryError> {
    let inner_radius = inner_radius_mm(params.ring_size);
    let tube_radius = tube_radius_mm(params.band_width);

    let band = match params.band_profile {
        BandProfile::Flat => flat_band(inner_radius, tube_radius, params.band_width)?,
        BandProfile::Comfort => torus(
            tube_radius,
            inner_radius + tube_radius,
            RING_SEGMENTS,
            TUBE_SEGMENTS,
        )?,
        BandProfile::Round => half_round_band(inner_radius, tube_radius)?,
    };

    debug!(
        profile = ?params.band_profile,
        inner_radius,
        tube_radius,
        polygons = band.polygon_count(),
        "band built"
    );
    Ok(band)
}

/// Rectangular cross-section: outer cylinder minus a slightly taller bore.
fn flat_band(
    inner_radius: f64,
    thickness: f64,
    band_width: f64,
) -> Result<Solid, GeometryError> {
    let outer = cylinder(inner_radius + thickness, band_width, RING_SEGMENTS)?;
    let bore = cylinder(inner_radius, band_width + CUT_CLEARANCE_MM, RING_SEGMENTS)?;
    outer.subtract(&bore)
}

/// Half-round cross-section: flat wall against the finger at
/// `inner_radius`, semicircular bulge of radius `tube_radius` outward.
fn half_round_band(inner_radius: f64, tube_radius: f64) -> Result<Solid, GeometryError> {
    let arc_steps = TUBE_SEGMENTS / 2;
    // CCW in the (radial, z) plane: bottom of the flat wall, around the
    // outer dome, back to the top of the flat wall. The lathe closes the
    // wall edge itself.
    let profile: Vec<(f64, f64)> = (0..=arc_steps)
        .map(|i| {
            let a = -PI / 2.0 + i as f64 / arc_steps as f64 * PI;
            (
                inner_radius + tube_radius * a.cos(),
                tube_radius * a.sin(),
            )
        })
        .collect();
    lathe(&profile, RING_SEGMENTS)
}
