//! Domain layer with core entities, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{BasePath, FallbackChain, ImageReference, LoadState, Webcam};
pub use errors::{LoadFailure, LoadFailureReason};
pub use ports::{ImageInfo, ImageProbePort};
