//! Controller-owned state and UI boundary types

mod form;
mod list_view;
mod notification;

pub use form::{FormField, FormState, ValidationErrors};
pub use list_view::{ListViewState, SortColumn, SortDirection, SortOrder};
pub use notification::{Notification, NotificationReceiver, Notifier, Severity};
