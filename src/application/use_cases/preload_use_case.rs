//! Image preloading.

use std::sync::Arc;

use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use tracing::{debug, info, warn};

use crate::application::dto::PreloadReport;
use crate::domain::errors::LoadFailure;
use crate::domain::ports::ImageProbePort;

/// Verifies that images load before they are displayed.
#[derive(Clone)]
pub struct Preloader {
    probe: Arc<dyn ImageProbePort>,
}

impl std::fmt::Debug for Preloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preloader").finish_non_exhaustive()
    }
}

impl Preloader {
    /// Creates a preloader on top of the given probe.
    #[must_use]
    pub fn new(probe: Arc<dyn ImageProbePort>) -> Self {
        Self { probe }
    }

    /// Loads a single image.
    ///
    /// # Errors
    /// Returns `LoadFailure` carrying `url` if the image cannot be fetched or
    /// decoded.
    pub async fn preload(&self, url: &str) -> Result<String, LoadFailure> {
        match self.probe.probe(url).await {
            Ok(info) => {
                debug!(
                    url = %url,
                    width = info.width,
                    height = info.height,
                    bytes = info.bytes,
                    "Image preloaded"
                );
                Ok(url.to_string())
            }
            Err(reason) => {
                debug!(url = %url, reason = %reason, "Image failed to preload");
                Err(LoadFailure::new(url, reason))
            }
        }
    }

    /// Loads every url concurrently and waits for all of them.
    ///
    /// Never fails as a whole; each failure is reported in the result. Both
    /// lists follow completion order.
    pub async fn preload_all<I, S>(&self, urls: I) -> PreloadReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut pending: FuturesUnordered<_> = urls
            .into_iter()
            .map(|url| {
                let url = url.as_ref().to_string();
                async move { self.preload(&url).await }
            })
            .collect();

        let mut report = PreloadReport::default();
        while let Some(outcome) = pending.next().await {
            report.record(outcome);
        }

        if report.all_loaded() {
            info!(total = report.total(), "Preloaded all images");
        } else {
            warn!(
                loaded = report.successful.len(),
                failed = report.failed.len(),
                "Some images failed to preload"
            );
        }

        report
    }
}
