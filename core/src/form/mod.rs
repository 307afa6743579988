//! Bulk waybill form state and the submission workflow.
//!
//! A submission runs in three steps so a UI can drive it across an await
//! without holding a borrow of its state:
//!
//! ```text
//! begin_submission()  ──▶  Submission::run(service, sink).await  ──▶  finish(&outcome)
//!   validate, flag on          POST multipart, deliver PDF             flag off, feedback
//! ```
//!
//! [`BulkWaybillForm::submit`] chains the three for callers that can.

mod submission;

pub use submission::Submission;

use crate::api::{FileSink, Navigator, WaybillService};
use crate::error::{SubmitError, SubmitResult};
use crate::models::{Feedback, LabelSize, SelectedFile};

/// Shown after a PDF was delivered.
pub const SUCCESS_MESSAGE: &str = "Waybills generated successfully. PDF downloaded.";

/// Handle for an asynchronous file read started with
/// [`BulkWaybillForm::start_file_read`].
///
/// Only the most recent read may set the selected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRead(u64);

/// Local state of the bulk waybill form.
#[derive(Debug, Clone, Default)]
pub struct BulkWaybillForm {
    file: Option<SelectedFile>,
    label_size: LabelSize,
    in_progress: bool,
    feedback: Option<Feedback>,
    read_generation: u64,
    reading_file: bool,
}

impl BulkWaybillForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn label_size(&self) -> LabelSize {
        self.label_size
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// True while a picked file is still being read.
    pub fn reading_file(&self) -> bool {
        self.reading_file
    }

    /// Replace the selected file. Supersedes any read in flight.
    pub fn select_file(&mut self, file: SelectedFile) {
        log::debug!("Selected {:?}", file);
        self.read_generation += 1;
        self.reading_file = false;
        self.file = Some(file);
    }

    /// Drop the selected file. Supersedes any read in flight.
    pub fn clear_file(&mut self) {
        self.read_generation += 1;
        self.reading_file = false;
        self.file = None;
    }

    /// Mark a new file as being read; earlier reads become stale.
    pub fn start_file_read(&mut self) -> FileRead {
        self.read_generation += 1;
        self.reading_file = true;
        FileRead(self.read_generation)
    }

    /// Apply the result of `read` (`None` when reading failed).
    ///
    /// Returns false and changes nothing if a newer selection happened
    /// meanwhile.
    pub fn finish_file_read(&mut self, read: FileRead, file: Option<SelectedFile>) -> bool {
        if read.0 != self.read_generation {
            log::debug!("Discarding stale file read {:?}", file);
            return false;
        }
        self.reading_file = false;
        self.file = file;
        true
    }

    pub fn set_label_size(&mut self, size: LabelSize) {
        self.label_size = size;
    }

    /// Send the user to the template download address.
    pub fn download_template<S, N>(&self, service: &S, navigator: &N)
    where
        S: WaybillService,
        N: Navigator,
    {
        let url = service.template_url();
        log::info!("⬇️ Downloading template from {}", url);
        navigator.navigate(&url);
    }

    /// Validate the form and mark a submission as started.
    ///
    /// A missing file is reported through the feedback and leaves the
    /// in-progress flag untouched. A call while another submission is
    /// outstanding, or while the picked file is still being read, changes
    /// nothing.
    pub fn begin_submission(&mut self) -> SubmitResult<Submission> {
        if self.in_progress {
            return Err(SubmitError::InProgress);
        }
        if self.reading_file {
            return Err(SubmitError::FileLoading);
        }

        let Some(file) = self.file.clone() else {
            let err = SubmitError::NoFileSelected;
            self.feedback = Some(Feedback::Error(err.to_string()));
            return Err(err);
        };

        self.in_progress = true;
        self.feedback = None;
        Ok(Submission::new(file, self.label_size))
    }

    /// Record the outcome of a submission started with [`Self::begin_submission`].
    pub fn finish(&mut self, outcome: &SubmitResult<String>) {
        self.in_progress = false;
        match outcome {
            Ok(_) => {
                self.feedback = Some(Feedback::Success(SUCCESS_MESSAGE.to_string()));
                self.file = None;
            }
            Err(err) => {
                log::error!("Bulk upload failed: {}", err);
                self.feedback = Some(Feedback::Error(err.to_string()));
            }
        }
    }

    /// Run a whole submission against `service`, delivering the PDF to `sink`.
    pub async fn submit<S, D>(&mut self, service: &S, sink: &D) -> SubmitResult<String>
    where
        S: WaybillService,
        D: FileSink,
    {
        let submission = self.begin_submission()?;
        let outcome = submission.run(service, sink).await;
        self.finish(&outcome);
        outcome
    }
}
