//! # bookdesk-gateway
//!
//! Remote data gateway for the Book REST resource.
//!
//! Every operation performs one awaited HTTP round trip and returns either a
//! value or a typed [`GatewayError`]. The gateway keeps no state between calls
//! apart from its connection settings and never retries.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`list_all`](BookGateway::list_all) | `GET {base}` |
//! | [`get_by_id`](BookGateway::get_by_id) | `GET {base}/{id}` |
//! | [`search`](BookGateway::search) | `GET {base}/search?query=<urlencoded>` |
//! | [`create`](BookGateway::create) | `POST {base}` |
//! | [`update`](BookGateway::update) | `PUT {base}/{id}` |
//! | [`delete`](BookGateway::delete) | `DELETE {base}/{id}` |
//!
//! Collection responses may be a flat JSON array or a page object with a
//! `content` array; both decode to `Vec<Book>`.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)* — Use rustls.
//! - **`native-tls`** — Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bookdesk_gateway::{create_gateway, GatewayConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = create_gateway(&GatewayConfig::default())?;
//!
//!     for book in gateway.search("dune").await? {
//!         println!("#{} {} by {}", book.id, book.title, book.author);
//!     }
//!     Ok(())
//! }
//! ```

mod codec;
mod config;
mod error;
mod factory;
mod http_client;
mod rest;
mod traits;
mod types;
mod utils;

pub use config::{DEFAULT_BASE_URL, GatewayConfig};
pub use error::{GatewayError, Result};
pub use factory::create_gateway;
pub use rest::RestBookGateway;
pub use traits::BookGateway;
pub use types::{Book, BookDraft, BookId};
