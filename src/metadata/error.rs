//! Error types for metadata providers and resolution.

use reqwest::StatusCode;

/// A single upstream call failed.
///
/// The resolver never surfaces these; every variant means "this step produced
/// nothing" and the cascade moves on.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The request could not be sent or the connection failed.
    #[error("{provider} request to {path} failed: {source}")]
    Transport {
        provider: &'static str,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-2xx status.
    #[error("{provider} returned {status} for {path}")]
    Status {
        provider: &'static str,
        path: String,
        status: StatusCode,
    },

    /// The body could not be decoded into the expected shape.
    #[error("failed to decode {provider} response for {path}: {source}")]
    Decode {
        provider: &'static str,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// An id could not be used in a request path.
    #[error("{provider} request refused: unusable id {value:?}")]
    InvalidId {
        provider: &'static str,
        value: String,
    },
}

/// Result alias for provider client calls.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// No configured provider could produce a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Could not resolve metadata")]
    Unresolved,
}
