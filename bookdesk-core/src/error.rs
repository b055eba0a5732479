//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use bookdesk_gateway::GatewayError;

use bookdesk_gateway::BookId;

use crate::services::MutationKind;
use crate::types::{Severity, ValidationErrors};

/// Core layer error type
///
/// Every variant is locally recoverable: the user can correct input,
/// reselect, or resubmit.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// One or more form fields are invalid (never reaches the network)
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// A mutation that needs a selected row was submitted without one
    #[error("No book selected to {}", .0.verb())]
    NothingSelected(MutationKind),

    /// The selected row's details have not been loaded into the form
    #[error("Form is not bound to selected book {0}")]
    SelectionNotLoaded(BookId),

    /// Another mutation is still in flight
    #[error("Cannot {} while another change is in flight", .0.verb())]
    Busy(MutationKind),

    /// Remote data gateway failure
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl CoreError {
    /// Whether this is a normal user/business outcome rather than a fault.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Gateway(e) => e.is_expected(),
            _ => true,
        }
    }

    /// Dialog severity. Waiting for an in-flight change is a notice.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Busy(_) => Severity::Info,
            _ => Severity::Error,
        }
    }

    /// Dialog title for this error.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Invalid Fields",
            Self::NothingSelected(_) | Self::SelectionNotLoaded(_) => "No Selection",
            Self::Busy(_) => "Please Wait",
            Self::Gateway(_) => "Error",
        }
    }

    /// Text shown to the user. Never contains gateway diagnostics.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(errors) => errors.to_string(),
            Self::NothingSelected(kind) => format!("Please select a book to {}.", kind.verb()),
            Self::SelectionNotLoaded(_) => {
                "The selected book's details are not loaded yet. Reselect it to try again."
                    .to_string()
            }
            Self::Busy(_) => "Please wait for the current change to finish.".to_string(),
            Self::Gateway(e) => failure_reason(e),
        }
    }
}

/// Reason class for a gateway failure, phrased for the user.
pub fn failure_reason(error: &GatewayError) -> String {
    match error {
        GatewayError::Network { .. } => "Could not reach the library server.".to_string(),
        GatewayError::NotFound { .. } => "The book no longer exists on the server.".to_string(),
        GatewayError::Server { status, .. } => {
            format!("The server rejected the request (status {status}).")
        }
        GatewayError::Decode { .. } => "The server sent an unexpected response.".to_string(),
    }
}

/// Log a gateway failure at the level its kind calls for.
pub(crate) fn log_failure(action: &str, error: &GatewayError) {
    if error.is_expected() {
        log::warn!("{action} failed: {error}");
    } else {
        log::error!("{action} failed: {error}");
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
