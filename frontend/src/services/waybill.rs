//! Waybill service client for the browser, on top of `fetch`.

use gloo_net::http::{Request, Response};
use waybill_core::api::{FILE_FIELD, SIZE_FIELD};
use waybill_core::{BulkUpload, ServiceConfig, ServiceResponse, TransportError, WaybillService};
use wasm_bindgen::JsValue;
use web_sys::FormData;

use super::js::{bytes_to_blob, js_error_message};

/// [`WaybillService`] sending `multipart/form-data` through gloo-net.
#[derive(Debug, Clone)]
pub struct BrowserWaybillService {
    config: ServiceConfig,
}

impl BrowserWaybillService {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }
}

fn build_form_data(upload: &BulkUpload<'_>) -> Result<FormData, JsValue> {
    let form_data = FormData::new()?;
    let blob = bytes_to_blob(upload.file.bytes(), upload.file.kind().mime_type())?;
    form_data.append_with_blob_and_filename(FILE_FIELD, &blob, upload.file.name())?;
    form_data.append_with_str(SIZE_FIELD, upload.size.as_str())?;
    Ok(form_data)
}

async fn into_service_response(response: Response) -> Result<ServiceResponse, TransportError> {
    let status = response.status();
    // only visible cross-origin when the service exposes the header
    let content_disposition = response.headers().get("content-disposition");
    let body = response
        .binary()
        .await
        .map_err(|e| TransportError::new(e.to_string()))?;
    Ok(ServiceResponse {
        status,
        content_disposition,
        body,
    })
}

impl WaybillService for BrowserWaybillService {
    fn template_url(&self) -> String {
        self.config.template_url()
    }

    async fn post_bulk(&self, upload: BulkUpload<'_>) -> Result<ServiceResponse, TransportError> {
        let form_data =
            build_form_data(&upload).map_err(|e| TransportError::new(js_error_message(&e)))?;

        let url = self.config.bulk_url();
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .body(form_data)
            .map_err(|e| TransportError::new(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        into_service_response(response).await
    }
}
