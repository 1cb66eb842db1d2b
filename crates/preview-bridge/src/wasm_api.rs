//! WASM entry points for the preview web worker.
//!
//! Only compiled for the `wasm32` target. JavaScript calls these from the
//! worker's message handler.

use wasm_bindgen::prelude::*;

use ring_types::DesignParameters;

use crate::dispatch::{dispatch, generate_preview_bytes};
use crate::messages::{UiToWorker, WorkerToUi};

/// One-time module setup: install the panic hook for readable errors.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Process a JSON `UiToWorker` message and return a JSON `WorkerToUi`
/// response.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    let response = match serde_json::from_str::<UiToWorker>(json_input) {
        Ok(msg) => dispatch(msg),
        Err(e) => WorkerToUi::Error {
            request_id: None,
            message: format!("failed to parse message: {e}"),
        },
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"type":"Error","request_id":null,"message":"response serialization failed: {e}"}}"#)
    })
}

/// Binary fast path: parse a `DesignParameters` JSON object and return the
/// STL bytes directly, skipping the base64 envelope.
///
/// The returned array is a copy into JS memory, so it stays valid across
/// later wasm calls and memory growth.
#[wasm_bindgen]
pub fn generate_preview(params_json: &str) -> Result<js_sys::Uint8Array, JsValue> {
    let params: DesignParameters = serde_json::from_str(params_json)
        .map_err(|e| JsValue::from_str(&format!("failed to parse parameters: {e}")))?;

    match generate_preview_bytes(&params) {
        Ok(bytes) => Ok(js_sys::Uint8Array::from(bytes.as_slice())),
        Err(e) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!("preview failed: {e}")));
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}
