//! Native HTTP client for the waybill service, built on reqwest.

use reqwest::header::CONTENT_DISPOSITION;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use super::{BulkUpload, ServiceResponse, WaybillService, FILE_FIELD, SIZE_FIELD};
use crate::config::ServiceConfig;
use crate::error::TransportError;

/// [`WaybillService`] over reqwest multipart requests.
///
/// No timeout is set on the client: a slow service keeps the submission
/// outstanding until it answers or the connection drops.
#[derive(Debug, Clone)]
pub struct HttpWaybillService {
    client: Client,
    config: ServiceConfig,
}

impl HttpWaybillService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

impl WaybillService for HttpWaybillService {
    fn template_url(&self) -> String {
        self.config.template_url()
    }

    async fn post_bulk(&self, upload: BulkUpload<'_>) -> Result<ServiceResponse, TransportError> {
        let part = Part::bytes(upload.file.bytes().to_vec())
            .file_name(upload.file.name().to_string())
            .mime_str(upload.file.kind().mime_type())?;
        let form = Form::new()
            .part(FILE_FIELD, part)
            .text(SIZE_FIELD, upload.size.as_str());

        let url = self.config.bulk_url();
        log::debug!("POST {}", url);

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status().as_u16();
        let content_disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await?.to_vec();

        Ok(ServiceResponse {
            status,
            content_disposition,
            body,
        })
    }
}
