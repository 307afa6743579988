//! Contract with the external waybill service and the user's environment.
//!
//! The form never touches HTTP or the DOM directly. It talks to three
//! capabilities, implemented natively (tests, [`http`]) or in the browser
//! (the frontend crate):
//!
//! | Capability        | Purpose                                      |
//! |-------------------|----------------------------------------------|
//! | [`WaybillService`] | template address + bulk PDF generation      |
//! | [`FileSink`]       | hand a binary payload to the user as a file |
//! | [`Navigator`]      | send the user to another address            |

pub mod disposition;
#[cfg(feature = "native")]
pub mod http;

pub use disposition::{filename_from_disposition, DEFAULT_PDF_FILENAME};
#[cfg(feature = "native")]
pub use http::HttpWaybillService;

use crate::error::{DeliveryError, TransportError};
use crate::models::{LabelSize, SelectedFile};

/// Multipart field carrying the spreadsheet.
pub const FILE_FIELD: &str = "file";

/// Multipart field carrying the label size.
pub const SIZE_FIELD: &str = "size";

/// Request body of a bulk generation call.
#[derive(Debug, Clone, Copy)]
pub struct BulkUpload<'a> {
    pub file: &'a SelectedFile,
    pub size: LabelSize,
}

/// Reply from the bulk endpoint, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status: u16,
    pub content_disposition: Option<String>,
    pub body: Vec<u8>,
}

impl ServiceResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The remote waybill service.
///
/// `post_bulk` only fails when no response was obtained; HTTP error
/// statuses are returned as a normal [`ServiceResponse`].
#[allow(async_fn_in_trait)]
pub trait WaybillService {
    /// Address serving the blank spreadsheet template.
    fn template_url(&self) -> String;

    /// Upload a spreadsheet and return the raw reply.
    async fn post_bulk(&self, upload: BulkUpload<'_>) -> Result<ServiceResponse, TransportError>;
}

/// Delivers a binary payload to the user under a file name.
pub trait FileSink {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> Result<(), DeliveryError>;
}

/// Sends the user to an address (the browser handles what comes back).
pub trait Navigator {
    fn navigate(&self, url: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_range() {
        let mut response = ServiceResponse {
            status: 200,
            ..Default::default()
        };
        assert!(response.is_success());
        response.status = 204;
        assert!(response.is_success());
        response.status = 302;
        assert!(!response.is_success());
        response.status = 422;
        assert!(!response.is_success());
    }

    #[test]
    fn test_response_text_is_lossy() {
        let response = ServiceResponse {
            status: 400,
            content_disposition: None,
            body: vec![b'b', b'a', b'd', 0xff],
        };
        assert_eq!(response.text(), "bad\u{fffd}");
    }
}
