//! Presentation layer: command dispatch and result rendering.

/// Command dispatcher.
pub mod app;
/// Result rendering.
pub mod report;

pub use app::{App, build_probe};
pub use report::{OutputFormat, Reporter};
