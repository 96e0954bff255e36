use serde::Serialize;
use thiserror::Error;

/// Errors returned by the relay client.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The underlying `reqwest::Client` could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid relay endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("failed to encode sample as JSON: {0}")]
    Encode(#[from] serde_json::Error),

    /// The endpoint answered with anything other than HTTP 200.
    #[error("relay endpoint {endpoint} answered HTTP {status}")]
    Status { status: u16, endpoint: String },

    #[error("relay to {endpoint} timed out")]
    Timeout { endpoint: String },

    /// Connection refused, DNS, TLS, or any other failure before a response.
    #[error("could not reach relay endpoint {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Coarse classification of a [`RelayError`], safe to show or serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelayErrorKind {
    Client,
    Endpoint,
    Encode,
    Status,
    Timeout,
    Transport,
}

impl RelayError {
    #[must_use]
    pub fn kind(&self) -> RelayErrorKind {
        match self {
            RelayError::Client(_) => RelayErrorKind::Client,
            RelayError::InvalidEndpoint { .. } => RelayErrorKind::Endpoint,
            RelayError::Encode(_) => RelayErrorKind::Encode,
            RelayError::Status { .. } => RelayErrorKind::Status,
            RelayError::Timeout { .. } => RelayErrorKind::Timeout,
            RelayError::Transport { .. } => RelayErrorKind::Transport,
        }
    }
}
