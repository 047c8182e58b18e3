//! Application layer with URL services, use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Pure URL services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{PreloadReport, WebcamImage};
pub use use_cases::{LoadWebcamUseCase, Preloader};
