//! Gateway factory functions.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::error::Result;
use crate::rest::RestBookGateway;
use crate::traits::BookGateway;

/// Creates a [`BookGateway`] for the resource described by `config`.
///
/// The gateway is wrapped in `Arc<dyn BookGateway>` for sharing across async
/// tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use bookdesk_gateway::{create_gateway, GatewayConfig};
///
/// let gateway = create_gateway(&GatewayConfig::new("http://localhost:8080/api/books")).unwrap();
/// ```
pub fn create_gateway(config: &GatewayConfig) -> Result<Arc<dyn BookGateway>> {
    log::info!("Using book resource at {}", config.base_url);
    Ok(Arc::new(RestBookGateway::new(config)?))
}
