//! Gem-setting head: prong cylinders around the stone seat, tied together
//! by a basket disc partway up.
//!
//! The head is built along +Z with its base at z = 0; the assembly step in
//! `lib.rs` seats and orients it on the band. The stone itself is not part
//! of the cast solid, so `gem_shape` has no effect here.

use ring_types::DesignParameters;
use solid_kernel::{cylinder, GeometryError, Solid, Vector3};
use tracing::debug;

/// Diamond diameter-to-weight scaling: radius `3.25 * carats^(1/3)` mm.
/// Cube-root law; keep the coefficient exact for dimensional plausibility.
pub const GEM_RADIUS_COEFF_MM: f64 = 3.25;

pub const PRONG_RADIUS_MM: f64 = 0.4;
pub const PRONG_SEGMENTS: usize = 16;
/// Basket disc radius as a fraction of the gem radius.
pub const BASKET_RADIUS_RATIO: f64 = 0.7;
pub const BASKET_HEIGHT_MM: f64 = 0.8;
/// Fraction of the prong height at which the basket sits.
pub const BASKET_SEAT_RATIO: f64 = 0.35;

pub fn gem_radius_mm(gem_size: f64) -> f64 {
    GEM_RADIUS_COEFF_MM * gem_size.cbrt()
}

pub fn head_height_mm(gem_size: f64) -> f64 {
    4.0 + gem_size * 0.5
}

/// Prong placement angles: evenly spaced starting at 0°, no randomization.
pub fn prong_angles_deg(prong_count: usize) -> Vec<f64> {
    (0..prong_count)
        .map(|i| i as f64 / prong_count as f64 * 360.0)
        .collect()
}

/// The placed prong solids, in placement order. Each prong is translated
/// out along +X to the gem radius, then rotated about Z to its angle.
pub fn prongs(params: &DesignParameters) -> Result<Vec<Solid>, GeometryError> {
    let gem_radius = gem_radius_mm(params.gem_size);
    let prong_height = head_height_mm(params.gem_size) + 1.0;

    // Template stands on z = 0.
    let template = cylinder(PRONG_RADIUS_MM, prong_height, PRONG_SEGMENTS)?
        .translated(Vector3::new(0.0, 0.0, prong_height / 2.0));

    Ok(prong_angles_deg(params.prong_count.count())
        .into_iter()
        .map(|angle| {
            template
                .translated(Vector3::new(gem_radius, 0.0, 0.0))
                .rotated_z_deg(angle)
        })
        .collect())
}

/// Union the prongs and the basket into the complete head.
pub fn build_head(params: &DesignParameters) -> Result<Solid, GeometryError> {
    let gem_radius = gem_radius_mm(params.gem_size);
    let prong_height = head_height_mm(params.gem_size) + 1.0;

    let mut placed = prongs(params)?.into_iter();
    let mut head = placed.next().ok_or(GeometryError::EmptySolid)?;
    for prong in placed {
        head = head.union(&prong)?;
    }

    let basket = cylinder(
        BASKET_RADIUS_RATIO * gem_radius,
        BASKET_HEIGHT_MM,
        PRONG_SEGMENTS * 2,
    )?
    .translated(Vector3::new(0.0, 0.0, prong_height * BASKET_SEAT_RATIO));
    head = head.union(&basket)?;

    debug!(
        prong_count = params.prong_count.count(),
        gem_radius,
        prong_height,
        polygons = head.polygon_count(),
        "setting head built"
    );
    Ok(head)
}
