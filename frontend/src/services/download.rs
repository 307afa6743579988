//! Browser-side delivery: PDF downloads and template navigation.

use waybill_core::{DeliveryError, FileSink, Navigator};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, HtmlAnchorElement, Url};

use super::js::{bytes_to_blob, js_error_message};

const PDF_MIME: &str = "application/pdf";

/// Object URL that is revoked when dropped.
struct ObjectUrl(String);

impl ObjectUrl {
    fn create(blob: &Blob) -> Result<Self, JsValue> {
        Url::create_object_url_with_blob(blob).map(Self)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            log::warn!("Could not revoke {}: {}", self.0, js_error_message(&e));
        }
    }
}

/// Saves payloads through a transient `<a download>` element.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownload;

impl BrowserDownload {
    fn trigger(filename: &str, bytes: &[u8]) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("No document available"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("Document has no body"))?;

        let blob = bytes_to_blob(bytes, PDF_MIME)?;
        let url = ObjectUrl::create(&blob)?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")?
            .dyn_into()
            .map_err(JsValue::from)?;
        anchor.set_href(url.as_str());
        anchor.set_download(filename);

        body.append_child(&anchor)?;
        anchor.click();
        anchor.remove();
        Ok(())
    }
}

impl FileSink for BrowserDownload {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> Result<(), DeliveryError> {
        Self::trigger(filename, bytes).map_err(|e| DeliveryError::new(js_error_message(&e)))
    }
}

/// Points `window.location` at the target address.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("❌ No window to navigate to {}", url);
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            log::error!("❌ Navigation to {} failed: {}", url, js_error_message(&e));
        }
    }
}
