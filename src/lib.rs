//! camfeed - webcam image resolution and preloading.
//!
//! This crate turns logical image references into fetchable urls, decorates
//! them with cache-busting and size parameters, and verifies that they load
//! before display, falling back along a per-webcam chain.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing URL services, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and image probes.
pub mod infrastructure;
/// Presentation layer containing command dispatch and output.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "camfeed";
