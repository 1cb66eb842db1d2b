//! Parametric ring construction: `DesignParameters → Solid`.
//!
//! Pure and deterministic. The band is built first, then the gem-setting
//! head; the head is seated on the band and the two are unioned. Later
//! steps position themselves from radii computed in earlier ones, so the
//! order is fixed.

pub mod band;
pub mod head;

use ring_types::DesignParameters;
use solid_kernel::{GeometryError, Solid, Vector3};
use tracing::{debug, instrument};

pub use band::{
    build_band, inner_diameter_mm, inner_radius_mm, major_radius_mm, tube_radius_mm,
    RING_SEGMENTS, RING_SIZE_BASE_MM, RING_SIZE_STEP_MM, TUBE_SEGMENTS,
};
pub use head::{build_head, gem_radius_mm, head_height_mm, prong_angles_deg};

/// Errors from ring construction, tagged by stage.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BuildError {
    #[error("band construction failed")]
    Band(#[source] GeometryError),

    #[error("setting head construction failed")]
    Head(#[source] GeometryError),

    #[error("band/head union failed")]
    Assembly(#[source] GeometryError),
}

/// Height of the head's base above the ring center, along the setting axis.
/// The head sinks half a millimeter into the band so the union always
/// overlaps.
pub fn head_seat_mm(params: &DesignParameters) -> f64 {
    inner_radius_mm(params.ring_size) + tube_radius_mm(params.band_width) - 0.5
}

/// Build the complete ring solid for one parameter set.
#[instrument(skip(params), fields(
    ring_size = params.ring_size,
    band_width = params.band_width,
    profile = ?params.band_profile,
    gem_size = params.gem_size,
    prongs = params.prong_count.count(),
))]
pub fn build_ring(params: &DesignParameters) -> Result<Solid, BuildError> {
    let band = band::build_band(params).map_err(BuildError::Band)?;
    let head = head::build_head(params).map_err(BuildError::Head)?;

    // Seat the head: raise it along the setting axis, then lay it down
    // radially onto the band.
    let head = head
        .translated(Vector3::new(0.0, 0.0, head_seat_mm(params)))
        .rotated_x_deg(90.0);

    let ring = band.union(&head).map_err(BuildError::Assembly)?;
    debug!(polygons = ring.polygon_count(), "ring assembled");
    Ok(ring)
}
