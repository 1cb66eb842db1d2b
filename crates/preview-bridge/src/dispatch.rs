//! Host-agnostic message handling, shared by the wasm entry points and the
//! native tests.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use ring_builder::{build_ring, BuildError};
use ring_types::DesignParameters;
use stl_export::{mesh_to_binary_stl, StlError};

use crate::messages::{UiToWorker, WorkerToUi};

/// Errors from one preview generation.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("geometry construction failed: {0}")]
    Build(#[from] BuildError),

    #[error("mesh serialization failed: {0}")]
    Serialize(#[from] StlError),
}

/// Build and serialize one preview. This is the same builder/serializer
/// pair the server worker runs; only the byte handoff differs.
pub fn generate_preview_bytes(params: &DesignParameters) -> Result<Vec<u8>, BridgeError> {
    let solid = build_ring(params)?;
    let bytes = mesh_to_binary_stl(&solid.to_mesh())?;
    Ok(bytes)
}

/// Process one UI message. Every error path resolves to a typed response.
pub fn dispatch(msg: UiToWorker) -> WorkerToUi {
    match msg {
        UiToWorker::GeneratePreview { request_id, params } => {
            match generate_preview_bytes(&params) {
                Ok(bytes) => WorkerToUi::PreviewReady {
                    request_id,
                    triangle_count: ((bytes.len() - 84) / 50) as u32,
                    stl_base64: BASE64.encode(&bytes),
                },
                Err(e) => WorkerToUi::Error {
                    request_id: Some(request_id),
                    message: e.to_string(),
                },
            }
        }
    }
}
