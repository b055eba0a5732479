//! Search-as-you-type gating
//!
//! Turns the stream of search-field values into a minimal set of list/search
//! requests. The gate is by length and change, not by time.

use bookdesk_gateway::{Book, Result as GatewayResult};

use super::pending::{PendingRequest, RequestSeq};
use super::{Completion, ServiceContext};
use crate::error::{failure_reason, log_failure};
use crate::types::{ListViewState, Notification};

/// Shortest non-blank text that triggers a search, in characters.
pub const MIN_SEARCH_LEN: usize = 3;

/// Request the query trigger issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    ListAll,
    Search(String),
}

/// Debounced query trigger.
///
/// Idle when no request is outstanding, otherwise pending on the most recently
/// issued [`QueryKind`].
#[derive(Debug, Default)]
pub struct QueryTrigger {
    last_text: String,
    pending: PendingRequest<QueryKind>,
}

impl QueryTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide what a keystroke producing `text` should request, given the
    /// field's `previous` value.
    pub fn decide(previous: &str, text: &str) -> Option<QueryKind> {
        if text.trim().is_empty() {
            return Some(QueryKind::ListAll);
        }
        if text.chars().count() < MIN_SEARCH_LEN || text == previous {
            return None;
        }
        Some(QueryKind::Search(text.to_string()))
    }

    /// Current search field text.
    pub fn text(&self) -> &str {
        &self.last_text
    }

    /// The outstanding query, `None` when idle.
    pub fn pending(&self) -> Option<&QueryKind> {
        self.pending.outstanding()
    }

    pub fn is_idle(&self) -> bool {
        !self.pending.is_pending()
    }

    /// Handle a keystroke: issue at most one request.
    pub(crate) fn on_text_changed(&mut self, ctx: &ServiceContext, text: &str) {
        let decision = Self::decide(&self.last_text, text);
        self.last_text = text.to_string();
        match decision {
            Some(query) => self.issue(ctx, query),
            None => log::debug!("Search text {text:?} below threshold or unchanged"),
        }
    }

    /// Reload for the current text: search when non-blank (any length),
    /// everything otherwise.
    pub(crate) fn refresh(&mut self, ctx: &ServiceContext) {
        let query = if self.last_text.trim().is_empty() {
            QueryKind::ListAll
        } else {
            QueryKind::Search(self.last_text.clone())
        };
        self.issue(ctx, query);
    }

    pub(crate) fn list_all(&mut self, ctx: &ServiceContext) {
        self.issue(ctx, QueryKind::ListAll);
    }

    fn issue(&mut self, ctx: &ServiceContext, query: QueryKind) {
        let seq = self.pending.issue(query.clone());
        log::debug!("Query {seq}: {query:?}");

        let gateway = ctx.gateway();
        ctx.dispatch(
            async move {
                match query {
                    QueryKind::ListAll => gateway.list_all().await,
                    QueryKind::Search(text) => gateway.search(&text).await,
                }
            },
            move |outcome| Completion::Query { seq, outcome },
        );
    }

    /// Apply a query completion if it is the latest; returns whether it was.
    pub(crate) fn complete(
        &mut self,
        ctx: &ServiceContext,
        list: &mut ListViewState,
        seq: RequestSeq,
        outcome: GatewayResult<Vec<Book>>,
    ) -> bool {
        let Some(query) = self.pending.settle(seq) else {
            log::debug!("Query {seq} superseded, result discarded");
            return false;
        };

        match outcome {
            Ok(books) => {
                log::debug!("Query {seq} ({query:?}) returned {} book(s)", books.len());
                list.apply_full_replace(books);
            }
            Err(e) => {
                log_failure("Loading books", &e);
                ctx.notify(Notification::error(
                    "Error",
                    format!("Failed to load books. {}", failure_reason(&e)),
                ));
            }
        }
        true
    }
}
