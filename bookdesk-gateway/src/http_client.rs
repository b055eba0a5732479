//! Generic HTTP client tools
//!
//! Shared request execution for the REST gateway: send, log, classify the
//! status, read the body. Exactly one round trip per call; nothing here
//! retries.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{GatewayError, Result};
use crate::types::BookId;
use crate::utils::log_sanitizer::truncate_for_log;

/// Log target prefix for gateway traffic.
const LOG_TAG: &str = "books";

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the response text of a 2xx answer
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `method_name` - request method name (for logs)
    /// * `url` - request URL (for logs)
    /// * `target` - identifier the request addresses, reported in `NotFound`
    ///
    /// # Returns
    /// * `Ok(response_text)` - body of a successful response (may be empty)
    /// * `Err(GatewayError::Network)` - no response was received
    /// * `Err(GatewayError::NotFound)` - HTTP 404
    /// * `Err(GatewayError::Server)` - any other non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
        target: Option<BookId>,
    ) -> Result<String> {
        log::debug!("[{LOG_TAG}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::network(format!("request timed out: {e}"))
            } else {
                GatewayError::network(e)
            }
        })?;

        let status = response.status();
        log::debug!("[{LOG_TAG}] Response Status: {}", status.as_u16());

        let response_text = response
            .text()
            .await
            .map_err(|e| GatewayError::network(format!("failed to read response body: {e}")))?;

        log::debug!(
            "[{LOG_TAG}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Self::check_status(status, &response_text, target)?;
        Ok(response_text)
    }

    /// Map a non-2xx status to its typed failure.
    pub(crate) fn check_status(
        status: StatusCode,
        response_text: &str,
        target: Option<BookId>,
    ) -> Result<()> {
        if status.is_success() {
            return Ok(());
        }
        if status == StatusCode::NOT_FOUND {
            log::warn!("[{LOG_TAG}] Not found: {target:?}");
            return Err(GatewayError::NotFound { id: target });
        }
        log::error!("[{LOG_TAG}] Server error (HTTP {})", status.as_u16());
        let body = truncate_for_log(response_text.trim());
        Err(GatewayError::Server {
            status: status.as_u16(),
            body: (!body.is_empty()).then_some(body),
        })
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(GatewayError::Decode)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{LOG_TAG}] JSON parse failed: {e}");
            log::error!(
                "[{LOG_TAG}] Raw response: {}",
                truncate_for_log(response_text)
            );
            GatewayError::decode(e)
        })
    }
}
