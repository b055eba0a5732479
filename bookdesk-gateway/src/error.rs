use serde::{Deserialize, Serialize};

use crate::types::BookId;

/// Typed failure for every gateway operation.
///
/// The gateway never panics or retries across its boundary: each call yields
/// either a value or exactly one of these variants. Callers decide how (and
/// whether) a failure is shown to the user; the `Display` output here is a
/// diagnostic, not a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum GatewayError {
    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, timeout, interrupted body).
    Network {
        /// Error details.
        detail: String,
    },

    /// The remote reported that the entity does not exist (HTTP 404).
    NotFound {
        /// Identifier that was requested, when the call targeted one.
        id: Option<BookId>,
    },

    /// The remote answered with a non-2xx status other than 404.
    Server {
        /// HTTP status code.
        status: u16,
        /// Truncated response body, kept for diagnostics only.
        body: Option<String>,
    },

    /// The response body was malformed or had an unexpected shape.
    Decode {
        /// Error details.
        detail: String,
    },
}

impl GatewayError {
    /// Whether this is a normal business outcome rather than a fault.
    ///
    /// Expected errors are logged at `warn`; everything else at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn network(detail: impl std::fmt::Display) -> Self {
        Self::Network {
            detail: detail.to_string(),
        }
    }

    pub(crate) fn decode(detail: impl std::fmt::Display) -> Self {
        Self::Decode {
            detail: detail.to_string(),
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { detail } => write!(f, "Network error: {detail}"),
            Self::NotFound { id: Some(id) } => write!(f, "Book '{id}' not found"),
            Self::NotFound { id: None } => write!(f, "Resource not found"),
            Self::Server { status, body } => {
                if let Some(body) = body.as_deref().filter(|b| !b.is_empty()) {
                    write!(f, "Server error (HTTP {status}): {body}")
                } else {
                    write!(f, "Server error (HTTP {status})")
                }
            }
            Self::Decode { detail } => write!(f, "Decode error: {detail}"),
        }
    }
}

impl std::error::Error for GatewayError {}

pub type Result<T> = std::result::Result<T, GatewayError>;
