//! A submission detached from the form state.

use crate::api::{filename_from_disposition, BulkUpload, FileSink, WaybillService};
use crate::error::{SubmitError, SubmitResult};
use crate::models::{LabelSize, SelectedFile};

/// Snapshot of the form taken by [`super::BulkWaybillForm::begin_submission`].
///
/// Owns its data so it can be awaited without borrowing the form.
#[derive(Debug, Clone)]
pub struct Submission {
    file: SelectedFile,
    size: LabelSize,
}

impl Submission {
    pub(super) fn new(file: SelectedFile, size: LabelSize) -> Self {
        Self { file, size }
    }

    /// Upload the file and deliver the returned PDF.
    ///
    /// Returns the name the PDF was delivered under.
    pub async fn run<S, D>(&self, service: &S, sink: &D) -> SubmitResult<String>
    where
        S: WaybillService,
        D: FileSink,
    {
        log::info!(
            "📤 Uploading {} ({} bytes, size {})",
            self.file.name(),
            self.file.len(),
            self.size
        );

        let upload = BulkUpload {
            file: &self.file,
            size: self.size,
        };
        let response = service.post_bulk(upload).await?;

        if !response.is_success() {
            let body = response.text();
            log::warn!("❌ Bulk upload rejected ({}): {}", response.status, body);
            return Err(SubmitError::Rejected {
                status: response.status,
                body,
            });
        }

        let filename = filename_from_disposition(response.content_disposition.as_deref());
        sink.deliver(&filename, &response.body)?;
        log::info!("✅ Delivered {} ({} bytes)", filename, response.body.len());

        Ok(filename)
    }
}
