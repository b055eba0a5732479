//! bookdesk Core Library
//!
//! Client-side synchronization controller for a Book catalogue backed by a
//! remote REST service:
//! - List View State (displayed rows, sort, selection)
//! - Debounced Query Trigger (search-as-you-type)
//! - Selection Reconciler (fresh detail fetch on row selection)
//! - Mutation Coordinator (pessimistic create / update / delete)
//!
//! The library does not depend on any UI toolkit. A presentation layer calls
//! the [`BookController`] entry points, renders its state, and listens on the
//! [`Notifier`] channel for user-facing messages.

pub mod error;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{BookController, Settled};
pub use types::{FormState, ListViewState, Notification, Notifier, Severity};
