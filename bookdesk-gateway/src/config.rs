//! Gateway connection configuration

use std::time::Duration;

use reqwest::Client;

use crate::error::{GatewayError, Result};

/// Base URL of the Book resource used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/books";

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for [`RestBookGateway`](crate::RestBookGateway).
///
/// This is the only state the gateway carries between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Book resource URL, e.g. `http://localhost:8080/api/books`.
    pub base_url: String,
    /// Whole-request timeout. `None` waits for the transport to give up.
    pub timeout: Option<Duration>,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl GatewayConfig {
    /// Configuration for a resource at `base_url` with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL without trailing slashes.
    pub(crate) fn normalized_base_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }

    /// Build the HTTP client for these settings.
    pub(crate) fn build_client(&self) -> Result<Client> {
        let mut builder = Client::builder().connect_timeout(self.connect_timeout);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| GatewayError::network(format!("failed to create HTTP client: {e}")))
    }
}
