//! Error types for the character API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because a missing character is the
//! most common non-success answer from the API. All other non-2xx responses
//! land in `HttpError` with the raw status code and body for debugging.
//! Nothing above `CharacterRepository` ever sees these values; the repository
//! logs them and substitutes an empty result.

/// Errors returned by the API client and its transport.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404: the requested character or page does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// A request argument is outside the range the API accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Client configuration could not be read or applied.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// True for failures of the round-trip itself: network errors and
    /// non-success statuses.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::NotFound | ApiError::HttpError { .. } | ApiError::Transport(_)
        )
    }

    /// True when a response arrived but its body had the wrong shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::DeserializationError(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
