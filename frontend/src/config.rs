//! Application configuration.
//!
//! The waybill service address is fixed at build time from the
//! `BACKEND_URL` environment variable (e.g. `BACKEND_URL=https://... trunk build`).

use waybill_core::{ConfigResult, ServiceConfig};

/// Waybill service base URL.
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// Page title.
pub const APP_NAME: &str = "Bluedart Bulk Waybill Generator";

/// Validated service configuration for [`BACKEND_URL`].
pub fn service_config() -> ConfigResult<ServiceConfig> {
    ServiceConfig::new(BACKEND_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_config_is_valid() {
        let config = service_config().unwrap();
        assert!(config.bulk_url().ends_with("/api/bluedart/waybill/bulk"));
    }
}
