//! Preload result DTOs.

use serde::Serialize;

use crate::domain::entities::Webcam;
use crate::domain::errors::LoadFailure;

/// Outcome of preloading a batch of urls.
///
/// Both lists are in completion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreloadReport {
    /// Urls that loaded.
    pub successful: Vec<String>,
    /// Urls that failed, with the reason.
    pub failed: Vec<LoadFailure>,
}

impl PreloadReport {
    /// Total number of attempts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.successful.len() + self.failed.len()
    }

    /// Returns true if every attempt succeeded.
    #[must_use]
    pub fn all_loaded(&self) -> bool {
        self.failed.is_empty()
    }

    /// Records one completed attempt.
    pub fn record(&mut self, outcome: Result<String, LoadFailure>) {
        match outcome {
            Ok(url) => self.successful.push(url),
            Err(failure) => self.failed.push(failure),
        }
    }
}

/// The image chosen for one webcam after walking its fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebcamImage {
    /// The webcam.
    pub webcam: Webcam,
    /// Url to display.
    pub url: String,
    /// Position of `url` in the chain.
    pub position: usize,
    /// Whether `url` was verified to load.
    ///
    /// False only when every entry failed and the placeholder is used anyway.
    pub verified: bool,
    /// Failures hit before `url`, in chain order.
    pub failures: Vec<LoadFailure>,
}

impl WebcamImage {
    /// Returns true if the primary image loaded.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.verified && self.position == 0
    }
}
