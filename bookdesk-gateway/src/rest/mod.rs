//! REST Book gateway

mod http;
mod provider;

use reqwest::Client;

use crate::config::GatewayConfig;
use crate::error::Result;
use crate::types::BookId;

/// [`BookGateway`](crate::BookGateway) over the Book REST resource.
pub struct RestBookGateway {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl RestBookGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        Ok(Self {
            client: config.build_client()?,
            base_url: config.normalized_base_url(),
        })
    }

    /// Resource URL, `{base}`.
    pub(crate) fn collection_url(&self) -> String {
        self.base_url.clone()
    }

    /// Entity URL, `{base}/{id}`.
    pub(crate) fn item_url(&self, id: BookId) -> String {
        format!("{}/{id}", self.base_url)
    }

    /// Search URL, `{base}/search?query=<urlencoded>`.
    pub(crate) fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?query={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> RestBookGateway {
        RestBookGateway::new(&GatewayConfig::new("http://books.test/api/books/")).unwrap()
    }

    #[test]
    fn urls_use_normalized_base() {
        let gw = gateway();
        assert_eq!(gw.collection_url(), "http://books.test/api/books");
        assert_eq!(gw.item_url(BookId::new(42)), "http://books.test/api/books/42");
    }

    #[test]
    fn search_query_is_percent_encoded() {
        let gw = gateway();
        assert_eq!(
            gw.search_url("war & peace?"),
            "http://books.test/api/books/search?query=war%20%26%20peace%3F"
        );
        assert_eq!(
            gw.search_url("café"),
            "http://books.test/api/books/search?query=caf%C3%A9"
        );
    }
}
