use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, Result};

// ============ Identity ============

/// Server-assigned identifier of a stored book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for BookId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============ Records ============

/// A book as known to the remote service.
///
/// Identity is [`Book::id`]; two values with the same id describe the same
/// record, possibly at different points in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_date: NaiveDate,
}

/// A book that has not been created yet.
///
/// Carries no identifier and therefore never compares equal to a stored
/// [`Book`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_date: NaiveDate,
}

impl BookDraft {
    /// Attach an identifier, producing the record to send as an update.
    #[must_use]
    pub fn with_id(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            published_date: self.published_date,
        }
    }
}

// ============ Wire format ============

/// JSON shape of a book on the wire (`id` optional on input).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub published_date: NaiveDate,
}

impl From<&BookDraft> for BookPayload {
    fn from(draft: &BookDraft) -> Self {
        Self {
            id: None,
            title: draft.title.clone(),
            author: draft.author.clone(),
            isbn: draft.isbn.clone(),
            published_date: draft.published_date,
        }
    }
}

impl From<&Book> for BookPayload {
    fn from(book: &Book) -> Self {
        Self {
            id: Some(book.id.get()),
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            published_date: book.published_date,
        }
    }
}

impl TryFrom<BookPayload> for Book {
    type Error = GatewayError;

    fn try_from(payload: BookPayload) -> Result<Self> {
        let id = payload
            .id
            .ok_or_else(|| GatewayError::decode("book in response has no id"))?;
        Ok(Self {
            id: BookId::new(id),
            title: payload.title,
            author: payload.author,
            isbn: payload.isbn,
            published_date: payload.published_date,
        })
    }
}
