// ── Runtime API configuration ──
//
// Describes *where* the registry API lives. Core never reads config files;
// the front end builds an `ApiConfig` and hands it in.

use std::path::PathBuf;

use url::Url;

use cadastro_api::{ApiClient, TransportConfig};

use crate::error::CoreError;

/// Default API address when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API root (e.g., `http://localhost:8080`).
    pub base_url: Url,
    /// Extra CA certificate for HTTPS deployments.
    pub ca_cert: Option<PathBuf>,
}

impl ApiConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            ca_cert: None,
        }
    }

    /// Parse a base URL string, reporting bad input as a config error.
    pub fn parse(base_url: &str) -> Result<Self, CoreError> {
        let url = Url::parse(base_url).map_err(|e| CoreError::Config {
            message: format!("invalid API URL '{base_url}': {e}"),
        })?;
        Ok(Self::new(url))
    }

    /// Build the HTTP client every controller shares.
    pub fn connect(&self) -> Result<ApiClient, CoreError> {
        let mut transport = TransportConfig::default();
        if let Some(ref path) = self.ca_cert {
            transport = transport.with_ca_cert(path.clone());
        }
        Ok(ApiClient::new(self.base_url.clone(), &transport)?)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL.parse().expect("default API URL is valid"))
    }
}
