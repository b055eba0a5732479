//! Row selection → fresh detail fetch → form population

use bookdesk_gateway::{Book, BookId, GatewayError, Result as GatewayResult};

use super::pending::{PendingRequest, RequestSeq};
use super::{Completion, ServiceContext};
use crate::error::log_failure;
use crate::types::{FormState, ListViewState, Notification};

/// Re-fetches a selected record before it is shown in the form.
///
/// There is no cache: every selection, including reselecting the same row,
/// goes to the gateway. Only the latest selection's result is applied.
#[derive(Debug, Default)]
pub struct SelectionReconciler {
    pending: PendingRequest<BookId>,
}

impl SelectionReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier whose details are being fetched, if any.
    pub fn fetching(&self) -> Option<BookId> {
        self.pending.outstanding().copied()
    }

    pub(crate) fn select(&mut self, ctx: &ServiceContext, list: &mut ListViewState, id: BookId) {
        if list.get(id).is_none() {
            log::warn!("Selected book {id} is not displayed");
        }
        list.select(id);

        let seq = self.pending.issue(id);
        log::debug!("Detail {seq}: book {id}");

        let gateway = ctx.gateway();
        ctx.dispatch(
            async move { gateway.get_by_id(id).await },
            move |outcome| Completion::Detail { seq, outcome },
        );
    }

    /// Drop any outstanding detail fetch.
    pub(crate) fn cancel(&mut self) {
        if let Some(id) = self.pending.cancel() {
            log::debug!("Detail fetch for book {id} abandoned");
        }
    }

    /// Apply a detail completion if it is the latest; returns whether it was.
    pub(crate) fn complete(
        &mut self,
        ctx: &ServiceContext,
        list: &mut ListViewState,
        form: &mut FormState,
        seq: RequestSeq,
        outcome: GatewayResult<Book>,
    ) -> bool {
        let Some(id) = self.pending.settle(seq) else {
            log::debug!("Detail {seq} superseded, result discarded");
            return false;
        };

        match outcome {
            Ok(book) => {
                form.populate(&book);
                list.apply_replace(book);
            }
            Err(e) => {
                log_failure(&format!("Fetching book {id}"), &e);
                let body = if matches!(e, GatewayError::NotFound { .. }) {
                    "This book no longer exists on the server. Refresh the list to remove it."
                } else {
                    "Could not fetch book details. Please try again."
                };
                ctx.notify(Notification::error("Error", body));
            }
        }
        true
    }
}
