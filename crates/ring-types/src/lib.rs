pub mod job;
pub mod params;

pub use job::{JobRecord, JobStatus};
pub use params::{BandProfile, DesignParameters, GemShape, MetalType, ProngCount};
