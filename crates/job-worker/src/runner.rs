//! One job, start to finish:
//! `received → building → serialized → (uploaded | failed)`.

use ring_types::{JobRecord, JobStatus};
use ring_builder::build_ring;
use stl_export::{mesh_to_binary_stl, STL_MIME_TYPE};
use tracing::{error, info, instrument, warn};

use crate::fallback::fallback_solid;
use crate::store::ObjectStore;

/// Result of a job run. The worker never panics and never returns early
/// without a terminal status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    pub status: JobStatus,
    /// True when the fallback solid was substituted for failed geometry.
    pub degraded: bool,
    pub warnings: Vec<String>,
}

/// Execute a single generation job against the given store.
///
/// Geometry failure is recovered by substituting the fallback solid (the
/// job completes, degraded). Serialization or storage failure is terminal
/// for the job. Safe to re-invoke with identical inputs: the output bytes
/// and storage key are deterministic.
#[instrument(skip_all, fields(job_id = %job.id))]
pub fn run_job(job: &JobRecord, store: &dyn ObjectStore) -> JobOutcome {
    info!(prompt = %job.prompt, "job received");

    let mut warnings = Vec::new();

    info!("building ring solid");
    let (solid, degraded) = match build_ring(&job.params) {
        Ok(solid) => (solid, false),
        Err(e) => {
            warn!(error = %e, "geometry construction failed, substituting fallback solid");
            warnings.push(format!("geometry construction failed: {e}"));
            (fallback_solid(), true)
        }
    };

    let mesh = solid.to_mesh();
    let bytes = match mesh_to_binary_stl(&mesh) {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(error = %e, "mesh serialization failed");
            return JobOutcome {
                status: JobStatus::Failed {
                    message: format!("mesh serialization failed: {e}"),
                },
                degraded,
                warnings,
            };
        }
    };
    info!(
        triangles = mesh.triangle_count(),
        bytes = bytes.len(),
        "mesh serialized"
    );

    let key = job.storage_key();
    match store.put(&key, &bytes, STL_MIME_TYPE) {
        Ok(receipt) => {
            info!(key = %receipt.key, size = receipt.size_bytes, "mesh uploaded");
            JobOutcome {
                status: JobStatus::Uploaded { key: receipt.key },
                degraded,
                warnings,
            }
        }
        Err(e) => {
            error!(error = %e, "upload failed");
            JobOutcome {
                status: JobStatus::Failed {
                    message: format!("upload failed: {e}"),
                },
                degraded,
                warnings,
            }
        }
    }
}
