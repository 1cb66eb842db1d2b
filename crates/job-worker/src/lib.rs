//! Server execution shell: runs one generation job from a queue delivery
//! to an object-store upload.
//!
//! The queue is assumed to deliver at least once, so `run_job` is
//! idempotent: identical inputs produce identical bytes at the same key.
//! No retry logic lives here; redelivery is the orchestrator's concern.

pub mod fallback;
pub mod runner;
pub mod store;

pub use fallback::fallback_solid;
pub use runner::{run_job, JobOutcome};
pub use store::{MemoryStore, ObjectStore, StoreError, StoredObject};
