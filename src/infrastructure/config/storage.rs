use super::app_config::AppConfig;
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const APP_QUALIFIER: &str = "org";
const APP_ORGANIZATION: &str = "camfeed";
const APP_NAME: &str = "camfeed";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

/// Where the loaded configuration came from.
#[derive(Debug)]
pub enum ConfigSource {
    /// Parsed from an existing file.
    File(PathBuf),
    /// The file was missing and a default one was written.
    Created(PathBuf),
    /// The file did not parse; defaults are used in memory.
    Invalid {
        /// The offending file.
        path: PathBuf,
        /// Parse error.
        error: toml::de::Error,
    },
}

impl ConfigSource {
    /// Logs how the configuration was obtained.
    ///
    /// Called once a subscriber is installed, since the log level itself comes
    /// from the configuration.
    pub fn log(&self) {
        match self {
            Self::File(path) => debug!(path = %path.display(), "Config loaded"),
            Self::Created(path) => {
                info!(path = %path.display(), "Config file not found, created default");
            }
            Self::Invalid { path, error } => {
                warn!(path = %path.display(), error = %error, "Failed to parse config file, using defaults");
            }
        }
    }
}

pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `StorageManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Loads the application configuration.
    ///
    /// A missing file is created with defaults. A file that does not parse is
    /// replaced by defaults in memory only; the returned `ConfigSource` says
    /// which case applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or written.
    pub fn load_config(
        &self,
        path_override: Option<&Path>,
    ) -> Result<(AppConfig, ConfigSource), ConfigError> {
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        if !config_path.exists() {
            let default_config = AppConfig::default();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            Self::save_to_file(&config_path, &default_config)?;
            return Ok((default_config, ConfigSource::Created(config_path)));
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(match toml::from_str::<AppConfig>(&content) {
            Ok(config) => (config, ConfigSource::File(config_path)),
            Err(error) => (
                AppConfig::default(),
                ConfigSource::Invalid {
                    path: config_path,
                    error,
                },
            ),
        })
    }

    /// Saves the application configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save_config(&self, config: &AppConfig) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.config_dir)?;
        Self::save_to_file(&self.config_dir.join(CONFIG_FILE_NAME), config)
    }

    fn save_to_file<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(data)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}
