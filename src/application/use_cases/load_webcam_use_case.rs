//! Webcam image selection along a fallback chain.

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::application::dto::WebcamImage;
use crate::application::services::{add_cache_buster, build_fallback_chain, current_timestamp};
use crate::domain::entities::{BasePath, FallbackChain, LoadState, Webcam};

use super::Preloader;

/// Picks the first loadable image for each webcam.
#[derive(Debug, Clone)]
pub struct LoadWebcamUseCase {
    preloader: Preloader,
    base: BasePath,
    cache_bust: bool,
}

impl LoadWebcamUseCase {
    /// Creates the use case.
    #[must_use]
    pub const fn new(preloader: Preloader, base: BasePath) -> Self {
        Self {
            preloader,
            base,
            cache_bust: false,
        }
    }

    /// Appends a cache buster to every candidate.
    #[must_use]
    pub const fn with_cache_bust(mut self, enabled: bool) -> Self {
        self.cache_bust = enabled;
        self
    }

    /// Returns the chain that would be tried for `webcam_id`.
    #[must_use]
    pub fn chain_for(&self, webcam_id: &str, timestamp: i64) -> FallbackChain {
        let chain = build_fallback_chain(webcam_id, &self.base);
        if self.cache_bust {
            chain.map(|url| add_cache_buster(url, timestamp))
        } else {
            chain
        }
    }

    /// Tries each chain entry in order until one loads.
    ///
    /// When every entry fails the placeholder is returned unverified.
    pub async fn execute(&self, webcam: Webcam) -> WebcamImage {
        self.execute_at(webcam, current_timestamp()).await
    }

    /// Like `execute` with an explicit cache-busting timestamp.
    pub async fn execute_at(&self, webcam: Webcam, timestamp: i64) -> WebcamImage {
        let chain = self.chain_for(&webcam.id, timestamp);
        let mut failures = Vec::new();

        for (position, url) in chain.iter().enumerate() {
            let outcome = self.preloader.preload(url).await;
            let state = LoadState::begin()
                .complete(&outcome)
                .unwrap_or(LoadState::Error);
            debug!(webcam = %webcam.id, position, url = %url, state = %state, "Tried webcam image");

            match outcome {
                Ok(url) => {
                    if position > 0 {
                        info!(webcam = %webcam.id, position, "Using fallback image");
                    }
                    return WebcamImage {
                        webcam,
                        url,
                        position,
                        verified: true,
                        failures,
                    };
                }
                Err(failure) => failures.push(failure),
            }
        }

        warn!(webcam = %webcam.id, "No image loaded, using placeholder");
        WebcamImage {
            webcam,
            url: chain.placeholder().to_string(),
            position: chain.len() - 1,
            verified: false,
            failures,
        }
    }

    /// Loads every webcam concurrently.
    pub async fn execute_all(&self, webcams: Vec<Webcam>) -> Vec<WebcamImage> {
        let timestamp = current_timestamp();
        join_all(
            webcams
                .into_iter()
                .map(|webcam| self.execute_at(webcam, timestamp)),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockImageProbe;
    use std::sync::Arc;

    fn use_case(probe: Arc<MockImageProbe>) -> LoadWebcamUseCase {
        LoadWebcamUseCase::new(Preloader::new(probe), BasePath::root())
    }

    #[tokio::test]
    async fn test_primary_image() {
        let probe = Arc::new(MockImageProbe::with_loadable(["/images/webcam/harbor.jpg"]));
        let image = use_case(probe.clone()).execute(Webcam::new("harbor")).await;

        assert!(image.is_primary());
        assert_eq!(image.url, "/images/webcam/harbor.jpg");
        assert!(image.failures.is_empty());
        assert_eq!(probe.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_advances_to_backup() {
        let probe = Arc::new(MockImageProbe::with_loadable([
            "/images/webcam/harbor_backup.jpg",
        ]));
        let image = use_case(probe.clone()).execute(Webcam::new("harbor")).await;

        assert_eq!(image.position, 1);
        assert!(image.verified);
        assert_eq!(image.failures.len(), 1);
        assert_eq!(image.failures[0].url, "/images/webcam/harbor.jpg");
    }

    #[tokio::test]
    async fn test_all_fail_returns_placeholder() {
        let probe = Arc::new(MockImageProbe::with_loadable(Vec::<String>::new()));
        let image = use_case(probe.clone()).execute(Webcam::new("harbor")).await;

        assert_eq!(image.url, "/images/placeholder.jpg");
        assert_eq!(image.position, 2);
        assert!(!image.verified);
        assert_eq!(image.failures.len(), 3);
        assert_eq!(
            probe.calls(),
            vec![
                "/images/webcam/harbor.jpg".to_string(),
                "/images/webcam/harbor_backup.jpg".to_string(),
                "/images/placeholder.jpg".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_cache_bust_applies_to_every_entry() {
        let probe = Arc::new(MockImageProbe::with_loadable(["/images/placeholder.jpg?t=7"]));
        let image = use_case(probe)
            .with_cache_bust(true)
            .execute_at(Webcam::new("harbor"), 7)
            .await;

        assert_eq!(image.url, "/images/placeholder.jpg?t=7");
        assert!(image.verified);
        assert!(image.failures.iter().all(|f| f.url.ends_with("?t=7")));
    }

    #[tokio::test]
    async fn test_execute_all_keeps_input_order() {
        let probe = Arc::new(MockImageProbe::with_loadable([
            "/images/webcam/a.jpg",
            "/images/webcam/b_backup.jpg",
        ]));
        let images = use_case(probe)
            .execute_all(vec![Webcam::new("a"), Webcam::new("b")])
            .await;

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].webcam.id, "a");
        assert_eq!(images[0].position, 0);
        assert_eq!(images[1].webcam.id, "b");
        assert_eq!(images[1].position, 1);
    }
}
