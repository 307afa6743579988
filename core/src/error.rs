//! Error types for the bulk waybill workflow.
//!
//! - [`TransportError`] - the request never produced a response
//! - [`DeliveryError`] - the PDF could not be handed to the user
//! - [`SubmitError`] - everything a submission can end with
//! - [`ConfigError`] - invalid or missing service address
//!
//! The `Display` output of [`SubmitError`] is exactly the text shown to the
//! user, so the form can store `err.to_string()` as its feedback.

use thiserror::Error;

/// Shown when a rejection carries no body.
pub const BULK_UPLOAD_FAILED: &str = "Bulk upload failed";

/// Shown when a failure has no description of its own.
pub const UNEXPECTED_ERROR: &str = "Unexpected error during bulk upload";

fn or_fallback<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.is_empty() {
        fallback
    } else {
        text
    }
}

// =============================================================================
// Capability Errors
// =============================================================================

/// Network or transport failure while talking to the waybill service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", or_fallback(.0, UNEXPECTED_ERROR))]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

/// Failure while delivering the generated PDF to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", or_fallback(.0, UNEXPECTED_ERROR))]
pub struct DeliveryError(pub String);

impl DeliveryError {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}

// =============================================================================
// Submission Errors (top-level)
// =============================================================================

/// Outcome of a failed bulk submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Submit pressed without a file.
    #[error("Please select an XLSX or CSV file")]
    NoFileSelected,

    /// A previous submission has not finished yet.
    #[error("A bulk upload is already in progress")]
    InProgress,

    /// The picked file is still being read.
    #[error("The selected file is still loading")]
    FileLoading,

    /// Request could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Service answered with a non-success status.
    #[error("{}", or_fallback(.body, BULK_UPLOAD_FAILED))]
    Rejected { status: u16, body: String },

    /// PDF was received but could not be delivered.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while building a [`crate::ServiceConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No base address was configured.
    #[error("Missing {0} environment variable")]
    MissingBaseUrl(&'static str),

    /// Base address is not an http(s) URL.
    #[error("Invalid waybill service address '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for submissions.
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
