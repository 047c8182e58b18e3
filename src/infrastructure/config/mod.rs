//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{AppConfig, LogLevel, PreloadConfig, ResolverConfig, WatchConfig};
pub use args::{CliArgs, Command, GlobalArgs};
pub use storage::{ConfigError, ConfigSource, StorageManager};
