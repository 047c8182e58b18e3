//! Lifecycle of a single image load attempt.

use serde::Serialize;

/// Status of one attempted image load.
///
/// The preloader only reports terminal outcomes; retrying is driven by the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    /// Attempt in flight.
    #[default]
    Loading,
    /// Attempt succeeded.
    Loaded,
    /// Attempt failed.
    Error,
    /// Caller decided to try again.
    Retrying,
}

impl LoadState {
    /// State of a freshly started attempt.
    #[must_use]
    pub const fn begin() -> Self {
        Self::Loading
    }

    /// Moves `Loading` to `Loaded` or `Error` depending on the outcome.
    #[must_use]
    pub const fn complete<T, E>(self, outcome: &Result<T, E>) -> Option<Self> {
        match self {
            Self::Loading => Some(if outcome.is_ok() {
                Self::Loaded
            } else {
                Self::Error
            }),
            _ => None,
        }
    }

    /// Moves `Error` to `Retrying`.
    #[must_use]
    pub const fn retry(self) -> Option<Self> {
        match self {
            Self::Error => Some(Self::Retrying),
            _ => None,
        }
    }

    /// Moves `Retrying` back to `Loading`.
    #[must_use]
    pub const fn restart(self) -> Option<Self> {
        match self {
            Self::Retrying => Some(Self::Loading),
            _ => None,
        }
    }

    /// Returns true once the attempt has an outcome.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Loaded | Self::Error)
    }
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "loading"),
            Self::Loaded => write!(f, "loaded"),
            Self::Error => write!(f, "error"),
            Self::Retrying => write!(f, "retrying"),
        }
    }
}
