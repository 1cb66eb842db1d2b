/// Errors from solid construction and boolean combination.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GeometryError {
    #[error("degenerate {primitive} primitive: {reason}")]
    DegeneratePrimitive {
        primitive: &'static str,
        reason: String,
    },

    #[error("{operation} produced an empty solid")]
    EmptyResult { operation: &'static str },

    #[error("solid has no polygons")]
    EmptySolid,
}
