/// Message shown for failures that carry no server-provided text.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Errors from the REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    ///
    /// `message` is the body's `message` field, or the operation's fallback
    /// text when the body has none.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        message: String,
    },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The owning scope was cancelled before the request completed.
    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Text suitable for an inline error banner.
    ///
    /// Server messages are shown verbatim; transport and decoding problems
    /// collapse to [`GENERIC_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { message, .. } => message.clone(),
            ApiError::Cancelled => "Request cancelled.".to_string(),
            ApiError::Request(_) | ApiError::Decode(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    /// HTTP status for [`ApiError::Api`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether another attempt of an idempotent request might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Request(e) => !e.is_builder(),
            ApiError::Api { status, .. } => *status == 429 || *status >= 500,
            ApiError::Decode(_) | ApiError::Cancelled => false,
        }
    }
}

/// Extract the `message` field from an error body, falling back to
/// `fallback` when the body is not JSON or carries no usable message.
pub(crate) fn message_from_body(body: &[u8], fallback: &str) -> String {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| fallback.to_string())
}
