//! Dispatches probes by url kind.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::trace;

use crate::domain::errors::LoadFailureReason;
use crate::domain::ports::{ImageInfo, ImageProbePort};

/// Sends site-relative urls to a local probe when one is configured and
/// everything else to the remote probe.
#[derive(Clone)]
pub struct ImageProbeRouter {
    remote: Arc<dyn ImageProbePort>,
    local: Option<Arc<dyn ImageProbePort>>,
}

impl std::fmt::Debug for ImageProbeRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageProbeRouter")
            .field("has_local", &self.local.is_some())
            .finish_non_exhaustive()
    }
}

impl ImageProbeRouter {
    /// Creates a router that sends everything to `remote`.
    #[must_use]
    pub fn new(remote: Arc<dyn ImageProbePort>) -> Self {
        Self {
            remote,
            local: None,
        }
    }

    /// Routes site-relative urls to `local`.
    #[must_use]
    pub fn with_local(mut self, local: Arc<dyn ImageProbePort>) -> Self {
        self.local = Some(local);
        self
    }
}

#[async_trait]
impl ImageProbePort for ImageProbeRouter {
    async fn probe(&self, url: &str) -> Result<ImageInfo, LoadFailureReason> {
        match &self.local {
            Some(local) if url.starts_with('/') => {
                trace!(url = %url, "Routing to local probe");
                local.probe(url).await
            }
            _ => {
                trace!(url = %url, "Routing to remote probe");
                self.remote.probe(url).await
            }
        }
    }
}
