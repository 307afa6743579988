//! UI components for the bulk waybill page.
//!
//! # Layout Components
//! - [`Hero`] - Page title
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`TemplateDownload`] - Link to the blank XLSX template
//! - [`UploadForm`] - File picker, label size and submit button
//! - [`FeedbackBanner`] - Error or success message of the last attempt

mod hero;
mod template;
mod upload;
mod feedback;
mod footer;

pub use hero::*;
pub use template::*;
pub use upload::*;
pub use feedback::*;
pub use footer::*;
