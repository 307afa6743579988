//! Waybill service configuration.
//!
//! The base address is injected explicitly; nothing in this crate reads it
//! from a global. Native callers can use [`ServiceConfig::from_env`], the
//! browser build bakes it in at compile time.

use crate::error::{ConfigError, ConfigResult};

/// Environment variable holding the waybill service base address.
pub const BACKEND_URL_ENV: &str = "WAYBILL_BACKEND_URL";

/// Template download path, relative to the base address.
pub const TEMPLATE_PATH: &str = "/api/bluedart/waybill/bulk/template";

/// Bulk generation path, relative to the base address.
pub const BULK_PATH: &str = "/api/bluedart/waybill/bulk";

/// Address of the waybill service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: String,
}

impl ServiceConfig {
    /// Validate and normalise a base address (trailing slashes are dropped).
    pub fn new(base_url: impl Into<String>) -> ConfigResult<Self> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| trimmed.len() > scheme.len() && trimmed.starts_with(scheme));
        if !has_host {
            return Err(ConfigError::InvalidBaseUrl(raw));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Read [`BACKEND_URL_ENV`], loading a `.env` file first if present.
    #[cfg(feature = "native")]
    pub fn from_env() -> ConfigResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }
        Self::from_env_value(std::env::var(BACKEND_URL_ENV).ok())
    }

    #[cfg(feature = "native")]
    fn from_env_value(value: Option<String>) -> ConfigResult<Self> {
        let url = value.ok_or(ConfigError::MissingBaseUrl(BACKEND_URL_ENV))?;
        Self::new(url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn template_url(&self) -> String {
        format!("{}{}", self.base_url, TEMPLATE_PATH)
    }

    pub fn bulk_url(&self) -> String {
        format!("{}{}", self.base_url, BULK_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let config = ServiceConfig::new("https://ship.example.com/").unwrap();
        assert_eq!(config.base_url(), "https://ship.example.com");
        assert_eq!(
            config.template_url(),
            "https://ship.example.com/api/bluedart/waybill/bulk/template"
        );
        assert_eq!(
            config.bulk_url(),
            "https://ship.example.com/api/bluedart/waybill/bulk"
        );
    }

    #[test]
    fn test_base_url_with_path_prefix() {
        let config = ServiceConfig::new("http://localhost:8080/shipping//").unwrap();
        assert_eq!(
            config.bulk_url(),
            "http://localhost:8080/shipping/api/bluedart/waybill/bulk"
        );
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_env_value_validation() {
        assert_eq!(
            ServiceConfig::from_env_value(None),
            Err(ConfigError::MissingBaseUrl(BACKEND_URL_ENV))
        );
        assert_eq!(
            ServiceConfig::from_env_value(Some("http://waybills.internal:8080/".into()))
                .unwrap()
                .base_url(),
            "http://waybills.internal:8080"
        );
        assert!(matches!(
            ServiceConfig::from_env_value(Some("waybills.internal".into())),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    // Only test touching the variable; steps run in sequence so they
    // cannot race each other.
    #[cfg(feature = "native")]
    #[test]
    fn test_from_env_reads_variable() {
        std::env::remove_var(BACKEND_URL_ENV);
        assert_eq!(
            ServiceConfig::from_env(),
            Err(ConfigError::MissingBaseUrl(BACKEND_URL_ENV))
        );

        std::env::set_var(BACKEND_URL_ENV, "https://ship.example.com/");
        assert_eq!(
            ServiceConfig::from_env().unwrap().bulk_url(),
            "https://ship.example.com/api/bluedart/waybill/bulk"
        );

        std::env::set_var(BACKEND_URL_ENV, "ship.example.com");
        assert_eq!(
            ServiceConfig::from_env(),
            Err(ConfigError::InvalidBaseUrl("ship.example.com".into()))
        );

        std::env::remove_var(BACKEND_URL_ENV);
    }

    #[test]
    fn test_invalid_base_url() {
        for bad in ["", "localhost:8080", "ftp://host", "http://"] {
            assert!(
                matches!(ServiceConfig::new(bad), Err(ConfigError::InvalidBaseUrl(_))),
                "accepted {:?}",
                bad
            );
        }
    }
}
