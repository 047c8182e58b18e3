//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::services::{OptimizeOptions, default_hosts};
use crate::domain::entities::{BasePath, Webcam};
use crate::infrastructure::image::DEFAULT_USER_AGENT;

use super::args::GlobalArgs;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warning level.
    #[default]
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Url resolution settings.
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Size and quality parameters for hosted images.
    #[serde(default)]
    pub optimize: OptimizeOptions,

    /// Preload settings.
    #[serde(default)]
    pub preload: PreloadConfig,

    /// Known webcams.
    #[serde(default)]
    pub webcams: Vec<Webcam>,

    /// Refresh loop settings.
    #[serde(default)]
    pub watch: WatchConfig,
}

/// Url resolution configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Prefix for site-relative references.
    #[serde(default)]
    pub base_path: BasePath,

    /// Host substrings eligible for size/quality parameters.
    #[serde(default = "default_hosts")]
    pub optimize_hosts: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_path: BasePath::root(),
            optimize_hosts: default_hosts(),
        }
    }
}

/// Preload configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreloadConfig {
    /// Origin used to fetch site-relative urls over HTTP.
    #[serde(default)]
    pub origin: Option<String>,

    /// Directory serving site-relative urls; takes precedence over `origin`.
    #[serde(default)]
    pub public_dir: Option<PathBuf>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with image requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Append a timestamp to webcam urls before loading.
    #[serde(default = "default_true")]
    pub cache_bust: bool,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            origin: None,
            public_dir: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            cache_bust: true,
        }
    }
}

/// Refresh loop configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Seconds between refreshes.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_interval_secs() -> u64 {
    300
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::default(),
            resolver: ResolverConfig::default(),
            optimize: OptimizeOptions::default(),
            preload: PreloadConfig::default(),
            webcams: Vec::new(),
            watch: WatchConfig::default(),
        }
    }
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: GlobalArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(base_path) = args.base_path {
            self.resolver.base_path = BasePath::new(base_path);
        }
        if let Some(origin) = args.origin {
            self.preload.origin = Some(origin);
        }
        if let Some(public_dir) = args.public_dir {
            self.preload.public_dir = Some(public_dir);
        }
        if let Some(timeout_secs) = args.timeout_secs {
            self.preload.timeout_secs = timeout_secs;
        }
        if args.no_cache_bust {
            self.preload.cache_bust = false;
        }
    }

    /// Returns the webcams matching `ids`, or all configured webcams when empty.
    ///
    /// Ids that are not configured are returned as bare webcams.
    #[must_use]
    pub fn select_webcams(&self, ids: &[String]) -> Vec<Webcam> {
        if ids.is_empty() {
            return self.webcams.clone();
        }

        ids.iter()
            .map(|id| {
                self.webcams
                    .iter()
                    .find(|w| &w.id == id)
                    .cloned()
                    .unwrap_or_else(|| Webcam::new(id.clone()))
            })
            .collect()
    }

    /// Returns the log file path, if file logging was requested.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone()
    }
}
