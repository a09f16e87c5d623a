//! Tagged failure type shared by every REST call and write validation.
//!
//! The frontend never lets a failure cross the engine boundary as a panic:
//! each request resolves to `Result<_, ApiError>` and the UI decides between
//! an inline message, a banner, or the "sign in again" signal.

use serde::Deserialize;
use thiserror::Error;

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
const GENERIC_CLIENT_FAILURE: &str = "The request was rejected.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Caller-side check failed; nothing was sent.
    #[error("{0}")]
    Validation(String),

    /// HTTP 401/403 from any endpoint.
    #[error("not authorized (HTTP {status})")]
    Unauthorized { status: u16 },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// 5xx
    #[error("server error (HTTP {status})")]
    Server { status: u16 },

    /// 4xx other than 401/403.
    #[error("{message} (HTTP {status})")]
    Client { status: u16, message: String },

    /// 2xx whose body could not be read as the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Error payload shape used by the backend. Either key may carry the text.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ApiError {
    /// Classify a non-2xx response. `body` is the raw response text, possibly
    /// empty or not JSON at all.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized { status },
            500..=599 => ApiError::Server { status },
            _ => ApiError::Client {
                status,
                message: server_message(body)
                    .unwrap_or_else(|| GENERIC_CLIENT_FAILURE.to_string()),
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Text for a transient banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Unauthorized { .. } => {
                "Your session has expired. Please sign in again.".to_string()
            }
            ApiError::Client { message, .. } => message.clone(),
            ApiError::Network(_) | ApiError::Server { .. } | ApiError::Decode(_) => {
                GENERIC_FAILURE.to_string()
            }
        }
    }
}

fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}
