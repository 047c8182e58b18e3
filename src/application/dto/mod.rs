//! Data transfer objects for the application layer.

mod preload_dto;

pub use preload_dto::{PreloadReport, WebcamImage};
