//! Domain models for the bulk waybill form.
//!
//! - [`LabelSize`] - page layout requested from the service
//! - [`SelectedFile`] - the spreadsheet picked by the user
//! - [`SpreadsheetKind`] - file type guessed from the name
//! - [`Feedback`] - the single message shown under the form

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Label Size
// =============================================================================

/// Label layout sent as the `size` multipart field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelSize {
    /// Four waybill copies on an A4 page.
    #[default]
    #[serde(rename = "A4")]
    A4,
    /// One waybill per 4x6 inch thermal label.
    #[serde(rename = "LABEL_4X6")]
    Label4x6,
}

impl LabelSize {
    /// All sizes, in display order.
    pub const ALL: [LabelSize; 2] = [LabelSize::A4, LabelSize::Label4x6];

    /// Value understood by the waybill service.
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelSize::A4 => "A4",
            LabelSize::Label4x6 => "LABEL_4X6",
        }
    }

    /// Human-readable label for select boxes.
    pub fn display_name(&self) -> &'static str {
        match self {
            LabelSize::A4 => "A4",
            LabelSize::Label4x6 => "4 x 6",
        }
    }
}

impl fmt::Display for LabelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known label size.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown label size: {0}")]
pub struct UnknownLabelSize(pub String);

impl FromStr for LabelSize {
    type Err = UnknownLabelSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabelSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| UnknownLabelSize(s.to_string()))
    }
}

// =============================================================================
// Selected File
// =============================================================================

/// Extensions offered by the file picker.
pub const ACCEPTED_EXTENSIONS: &str = ".xlsx,.csv";

/// Spreadsheet flavour, guessed from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetKind {
    Xlsx,
    Csv,
    /// Anything else; still uploaded, the service decides.
    Other,
}

impl SpreadsheetKind {
    pub fn from_name(name: &str) -> Self {
        let ext = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "xlsx" => SpreadsheetKind::Xlsx,
            "csv" => SpreadsheetKind::Csv,
            _ => SpreadsheetKind::Other,
        }
    }

    /// MIME type for the `file` multipart part.
    pub fn mime_type(&self) -> &'static str {
        match self {
            SpreadsheetKind::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            SpreadsheetKind::Csv => "text/csv",
            SpreadsheetKind::Other => "application/octet-stream",
        }
    }
}

/// A file chosen by the user, fully read into memory.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn kind(&self) -> SpreadsheetKind {
        SpreadsheetKind::from_name(&self.name)
    }
}

// Spreadsheets can be large; keep debug output to the metadata.
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

// =============================================================================
// Feedback
// =============================================================================

/// Message shown after a submission attempt. Error and success are exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Error(String),
    Success(String),
}

impl Feedback {
    pub fn message(&self) -> &str {
        match self {
            Feedback::Error(msg) | Feedback::Success(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Feedback::Error(_))
    }
}
