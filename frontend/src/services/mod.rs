//! Browser implementations of the waybill capabilities.
//!
//! # Services
//!
//! - [`waybill`] - bulk upload to the waybill service (gloo-net)
//! - [`download`] - PDF download trigger and template navigation
//! - [`file`] - reading the picked spreadsheet

pub mod js;
pub mod waybill;
pub mod download;
pub mod file;

pub use waybill::*;
pub use download::*;
pub use file::*;
