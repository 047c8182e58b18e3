//! Infrastructure layer with configuration and image probe adapters.

/// Application configuration.
pub mod config;
/// Image load verification (HTTP, local files, routing).
pub mod image;

pub use config::{
    AppConfig, CliArgs, Command, ConfigError, ConfigSource, GlobalArgs, LogLevel, StorageManager,
};
pub use image::{HttpImageProbe, HttpProbeConfig, ImageProbeRouter, LocalImageProbe};
