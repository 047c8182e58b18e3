//! Domain entity definitions.

mod base_path;
mod fallback_chain;
mod image_reference;
mod load_state;
mod webcam;

pub use base_path::BasePath;
pub use fallback_chain::{FallbackChain, PLACEHOLDER_PATH};
pub use image_reference::ImageReference;
pub use load_state::LoadState;
pub use webcam::Webcam;
