//! Response body decoding
//!
//! Collection endpoints answer either with a page wrapper
//! (`{"content": [...], ...}`) or with a flat array. Both decode to the same
//! `Vec<Book>`; the page shape is tried first.

use serde_json::Value;

use crate::error::{GatewayError, Result};
use crate::http_client::HttpUtils;
use crate::types::{Book, BookPayload};

/// Decode a list/search response body.
///
/// An empty body or a page whose `content` is `null` is an empty result.
pub(crate) fn decode_book_list(body: &str) -> Result<Vec<Book>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let items = match HttpUtils::parse_json::<Value>(body)? {
        Value::Object(mut page) => match page.remove("content") {
            Some(Value::Null) => return Ok(Vec::new()),
            Some(content) => content,
            None => {
                return Err(GatewayError::decode(
                    "object response has no `content` field",
                ));
            }
        },
        flat @ Value::Array(_) => flat,
        other => {
            return Err(GatewayError::decode(format!(
                "expected a book list or page object, got {}",
                json_kind(&other)
            )));
        }
    };

    let payloads: Vec<BookPayload> = serde_json::from_value(items).map_err(GatewayError::decode)?;
    payloads.into_iter().map(Book::try_from).collect()
}

/// Decode a single-book response body.
pub(crate) fn decode_book(body: &str) -> Result<Book> {
    let payload: BookPayload = HttpUtils::parse_json(body)?;
    Book::try_from(payload)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
