//! Use case implementations.

mod load_webcam_use_case;
mod preload_use_case;

pub use load_webcam_use_case::LoadWebcamUseCase;
pub use preload_use_case::Preloader;
