//! Reading user-picked files.

use js_sys::Uint8Array;
use waybill_core::SelectedFile;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use super::js::js_error_message;

/// Load the whole file into memory.
pub async fn read_selected_file(file: &File) -> Result<SelectedFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {}", file.name(), js_error_message(&e)))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(SelectedFile::new(file.name(), bytes))
}
