//! Interactive execution shell: live-preview geometry generation inside a
//! browser worker.
//!
//! The UI posts a parameter set, the worker replies with serialized mesh
//! bytes for immediate rendering. Generation runs off the UI thread by
//! construction (the wasm module lives in a web worker); nothing is
//! retained between calls, so concurrent previews never share state.

pub mod dispatch;
pub mod messages;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::{dispatch, generate_preview_bytes, BridgeError};
pub use messages::{UiToWorker, WorkerToUi};
