//! Generation job records and their status lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::params::DesignParameters;

/// One generation job as handed over by the orchestration layer.
///
/// The prompt is carried for logging and traceability only; prompt-to-
/// parameter extraction happens upstream and the parameters arrive already
/// validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub params: DesignParameters,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl JobRecord {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, params: DesignParameters) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            params,
            created_at: Utc::now(),
        }
    }

    /// Deterministic object-store key for this job's mesh.
    pub fn storage_key(&self) -> String {
        format!("models/{}.stl", self.id)
    }
}

/// Job lifecycle: `received → building → serialized → (uploaded | failed)`.
///
/// `Uploaded` and `Failed` are terminal. A degraded job (fallback geometry)
/// still ends `Uploaded`; the degradation is reported as a warning on the
/// outcome, not as a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum JobStatus {
    Received,
    Building,
    Serialized,
    Uploaded { key: String },
    Failed { message: String },
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Uploaded { .. } | JobStatus::Failed { .. })
    }
}
