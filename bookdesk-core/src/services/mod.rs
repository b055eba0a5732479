//! Synchronization services
//!
//! Each service owns the request bookkeeping for one purpose (query,
//! selection, mutation) and is driven by [`BookController`], the single
//! owning context. Gateway calls run as spawned tasks whose outcomes come back
//! over a channel as [`Completion`]s and are applied on the owning context
//! only.

mod controller;
mod mutation_coordinator;
mod pending;
mod query_trigger;
mod selection_reconciler;

use std::future::Future;
use std::sync::Arc;

use bookdesk_gateway::{Book, BookGateway, BookId, Result as GatewayResult};
use tokio::sync::mpsc;

use crate::types::{Notification, Notifier};

pub use controller::BookController;
pub use mutation_coordinator::{MutationCoordinator, MutationKind, MutationPhase};
pub use pending::{PendingRequest, RequestSeq};
pub use query_trigger::{QueryKind, QueryTrigger, MIN_SEARCH_LEN};
pub use selection_reconciler::SelectionReconciler;

/// Outcome of a gateway call, delivered back to the owning context.
#[derive(Debug)]
pub(crate) enum Completion {
    Query {
        seq: RequestSeq,
        outcome: GatewayResult<Vec<Book>>,
    },
    Detail {
        seq: RequestSeq,
        outcome: GatewayResult<Book>,
    },
    Mutation {
        seq: RequestSeq,
        outcome: MutationOutcome,
    },
}

#[derive(Debug)]
pub(crate) enum MutationOutcome {
    Created(GatewayResult<Book>),
    Updated(GatewayResult<Book>),
    Deleted {
        id: BookId,
        outcome: GatewayResult<()>,
    },
}

/// Request purpose, as reported by [`Settled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Query,
    Detail,
    Mutation,
}

/// What happened to one completion when it reached the owning context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// The result was current and has been applied.
    Applied(RequestKind),
    /// The result was superseded and has been dropped.
    Discarded(RequestKind),
}

/// Collaborators shared by all services.
pub(crate) struct ServiceContext {
    gateway: Arc<dyn BookGateway>,
    completions: mpsc::UnboundedSender<Completion>,
    notifier: Notifier,
}

impl ServiceContext {
    pub(crate) fn new(
        gateway: Arc<dyn BookGateway>,
        completions: mpsc::UnboundedSender<Completion>,
        notifier: Notifier,
    ) -> Self {
        Self {
            gateway,
            completions,
            notifier,
        }
    }

    pub(crate) fn gateway(&self) -> Arc<dyn BookGateway> {
        Arc::clone(&self.gateway)
    }

    pub(crate) fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }

    /// Run `request` on the runtime and post its outcome back as a completion.
    pub(crate) fn dispatch<T, Fut, W>(&self, request: Fut, wrap: W)
    where
        T: Send + 'static,
        Fut: Future<Output = GatewayResult<T>> + Send + 'static,
        W: FnOnce(GatewayResult<T>) -> Completion + Send + 'static,
    {
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let completion = wrap(request.await);
            if completions.send(completion).is_err() {
                log::debug!("Controller dropped, discarding completion");
            }
        });
    }
}
