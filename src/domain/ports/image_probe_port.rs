//! Port definition for image load verification.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::errors::LoadFailureReason;

/// What a successful probe learned about the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageInfo {
    /// Decoded width in pixels.
    pub width: u32,
    /// Decoded height in pixels.
    pub height: u32,
    /// Size of the encoded payload.
    pub bytes: usize,
}

/// Port for fetching and decoding a single image.
/// Implementations must be thread-safe.
#[async_trait]
pub trait ImageProbePort: Send + Sync {
    /// Fetches `url` and checks that it decodes as an image.
    async fn probe(&self, url: &str) -> Result<ImageInfo, LoadFailureReason>;
}
