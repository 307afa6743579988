//! # waybill-core - Bluedart bulk waybill submission
//!
//! The user fills a spreadsheet template, uploads it with a label size,
//! and gets back one PDF with every generated waybill. Parsing, waybill
//! allocation and PDF rendering all happen in the remote waybill service;
//! this crate owns the form state and the upload/download workflow.
//!
//! ## Workflow
//!
//! ```text
//! ┌──────────────┐  multipart   ┌─────────────────┐   PDF    ┌─────────────┐
//! │  Form state  │─────────────▶│ Waybill service │─────────▶│  File sink  │
//! │ file + size  │  file, size  │  (HTTP, remote) │  + name  │ (download)  │
//! └──────────────┘              └─────────────────┘          └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use waybill_core::{BulkWaybillForm, HttpWaybillService, SelectedFile, ServiceConfig};
//!
//! let service = HttpWaybillService::new(ServiceConfig::from_env()?);
//! let mut form = BulkWaybillForm::new();
//! form.select_file(SelectedFile::new("orders.xlsx", std::fs::read("orders.xlsx")?));
//! form.submit(&service, &my_sink).await?;
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types (their `Display` is the user-facing message)
//! - [`models`] - Label size, selected file, feedback
//! - [`config`] - Service base address and endpoint paths
//! - [`api`] - Capabilities: waybill service, file sink, navigator
//! - [`form`] - Form state machine and submission workflow

// Core modules
pub mod error;
pub mod models;
pub mod config;

// Service contract
pub mod api;

// Workflow
pub mod form;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConfigError, DeliveryError, SubmitError, TransportError,
    ConfigResult, SubmitResult,
    BULK_UPLOAD_FAILED, UNEXPECTED_ERROR,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    Feedback, LabelSize, SelectedFile, SpreadsheetKind, UnknownLabelSize,
    ACCEPTED_EXTENSIONS,
};

// =============================================================================
// Re-exports - Configuration
// =============================================================================

pub use config::{ServiceConfig, BACKEND_URL_ENV};

// =============================================================================
// Re-exports - Service contract
// =============================================================================

pub use api::{
    filename_from_disposition, BulkUpload, FileSink, Navigator, ServiceResponse,
    WaybillService, DEFAULT_PDF_FILENAME,
};

#[cfg(feature = "native")]
pub use api::HttpWaybillService;

// =============================================================================
// Re-exports - Workflow
// =============================================================================

pub use form::{BulkWaybillForm, FileRead, Submission, SUCCESS_MESSAGE};
