use thiserror::Error;

use crate::client::Endpoint;

/// Errors returned by [`crate::LeadsClient`].
#[derive(Debug, Error)]
pub enum LeadsClientError {
    /// The configured base URL cannot be parsed.
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// The underlying `reqwest::Client` could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Network, TLS, or timeout failure while talking to an endpoint.
    #[error("{endpoint} request failed: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { endpoint: Endpoint, status: u16 },

    /// The response body is not valid JSON or does not match the expected shape.
    #[error("JSON deserialization error for {endpoint}: {source}")]
    Deserialize {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    /// Extraction answered 2xx without data but with an explanatory message.
    #[error("{0}")]
    ExtractionFailed(String),

    /// Extraction answered 2xx with neither data nor a message.
    #[error("no data extracted")]
    NoData,
}

impl LeadsClientError {
    /// The endpoint the failure came from, when a request was issued.
    #[must_use]
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::Transport { endpoint, .. }
            | Self::UnexpectedStatus { endpoint, .. }
            | Self::Deserialize { endpoint, .. } => Some(*endpoint),
            Self::ExtractionFailed(_) | Self::NoData => Some(Endpoint::Extract),
            Self::InvalidBaseUrl { .. } | Self::Build(_) => None,
        }
    }
}
