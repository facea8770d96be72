//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// The venue's rejection message, when this error carries one.
    ///
    /// Create/delete rejections arrive as `{ "detail": … }` bodies; the
    /// dashboard surfaces that text to the user action that triggered them.
    pub fn api_detail(&self) -> Option<&str> {
        match self {
            SdkError::Http(http) => http.api_detail(),
            _ => None,
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response. `detail` is the venue's message when the body
    /// carried one, otherwise the raw body text.
    #[error("API error {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("Timeout")]
    Timeout,

    #[error("Retries exhausted after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },
}

impl HttpError {
    /// Whether a retry could plausibly succeed.
    ///
    /// Server-side 5xx, timeouts and connection-level failures are
    /// transient; 4xx rejections are not.
    pub fn is_transient(&self) -> bool {
        match self {
            HttpError::Api { status, .. } => *status >= 500,
            HttpError::Timeout => true,
            #[cfg(feature = "http")]
            HttpError::Transport(e) => {
                #[cfg(not(target_arch = "wasm32"))]
                let transient = e.is_connect() || e.is_timeout() || e.is_request();
                #[cfg(target_arch = "wasm32")]
                let transient = e.is_timeout() || e.is_request();
                transient
            }
            HttpError::RetriesExhausted { .. } => false,
        }
    }

    /// True for a 404 rejection (e.g. deleting an order that no longer
    /// rests on the book).
    pub fn is_not_found(&self) -> bool {
        matches!(self, HttpError::Api { status: 404, .. })
    }

    /// The venue's `detail` message, if this is an API rejection.
    pub fn api_detail(&self) -> Option<&str> {
        match self {
            HttpError::Api { detail, .. } => Some(detail),
            _ => None,
        }
    }
}
