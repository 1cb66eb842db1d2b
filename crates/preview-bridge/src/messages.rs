//! Messages crossing the worker boundary, serialized as JSON for
//! postMessage transfer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ring_types::DesignParameters;

/// Messages from the UI (JavaScript main thread) to the preview worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToWorker {
    /// Rebuild the preview for a new parameter set.
    ///
    /// `request_id` is echoed in the response. When parameter changes
    /// overlap, the newest request wins: the UI drops any response whose
    /// id is not the latest one it issued.
    GeneratePreview {
        request_id: Uuid,
        #[serde(default)]
        params: DesignParameters,
    },
}

/// Messages from the preview worker back to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorkerToUi {
    /// Geometry rebuilt; STL bytes for the viewer, base64 for JSON
    /// transport. (The binary fast path skips this envelope entirely.)
    PreviewReady {
        request_id: Uuid,
        triangle_count: u32,
        stl_base64: String,
    },

    /// Generation failed. The interactive path reports the error instead
    /// of substituting placeholder geometry.
    Error {
        request_id: Option<Uuid>,
        message: String,
    },
}
