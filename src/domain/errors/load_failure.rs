//! Image load failure types.

use serde::Serialize;
use thiserror::Error;

/// Why a single image failed to load.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum LoadFailureReason {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("not found")]
    NotFound,

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl LoadFailureReason {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Creates invalid url error.
    #[must_use]
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::InvalidUrl(message.into())
    }
}

/// An image that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("failed to load {url}: {reason}")]
pub struct LoadFailure {
    /// The url that was attempted.
    pub url: String,
    /// What went wrong.
    pub reason: LoadFailureReason,
}

impl LoadFailure {
    /// Creates a failure for `url`.
    #[must_use]
    pub fn new(url: impl Into<String>, reason: LoadFailureReason) -> Self {
        Self {
            url: url.into(),
            reason,
        }
    }
}
