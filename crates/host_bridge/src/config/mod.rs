//! Configuration system
//!
//! Host configuration is plain serde data loaded from TOML or RON. Every
//! section has defaults, so an empty file (or no file at all) is valid.

pub use serde::{Deserialize, Serialize};

use std::path::{Path, PathBuf};

use crate::sensor::SensorDelay;

/// On-disk configuration formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.ron`
    Ron,
}

impl ConfigFormat {
    /// Pick the format for a path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Serde-backed configuration that can live in a TOML or RON file
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Parse configuration text in the given format
    fn from_str_as(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        match format {
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
            ConfigFormat::Ron => ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Render configuration text in the given format
    fn to_string_as(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string())),
        }
    }

    /// Load configuration from a `.toml` or `.ron` file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = std::fs::read_to_string(path)?;
        Self::from_str_as(&contents, format)
    }

    /// Save configuration to a `.toml` or `.ron` file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = self.to_string_as(ConfigFormat::from_path(path)?)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid for its format
    #[error("Parse error: {0}")]
    Parse(String),

    /// The configuration could not be rendered
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Neither `.toml` nor `.ron`
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value failed validation
    #[error("Invalid value for {field}: {reason}")]
    Invalid {
        /// Dotted path of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Top-level host configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HostConfig {
    /// Directories handed to the engine at initialization
    pub paths: PathsConfig,
    /// Bundled asset lookup
    pub assets: AssetConfig,
    /// Motion sensor delivery
    pub sensor: SensorConfig,
    /// Log output
    pub logging: LoggingConfig,
}

impl Config for HostConfig {}

impl HostConfig {
    /// Check that every path the engine depends on is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paths.cache_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "paths.cache_dir",
                reason: "must not be empty".to_string(),
            });
        }
        if self.paths.storage_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "paths.storage_dir",
                reason: "must not be empty".to_string(),
            });
        }
        if self.assets.root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "assets.root",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Engine working directories
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathsConfig {
    /// Scratch space the engine may wipe at any time
    pub cache_dir: PathBuf,
    /// Persistent per-user storage (saves, settings)
    pub storage_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        let base = std::env::temp_dir().join("host_bridge");
        Self {
            cache_dir: base.join("cache"),
            storage_dir: base.join("files"),
        }
    }
}

/// Bundled asset configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory that resource paths like `/gfx/test.tga` resolve against
    pub root: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
        }
    }
}

/// Motion sensor configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SensorConfig {
    /// Requested delivery rate when the engine subscribes
    pub delay: SensorDelay,
}

/// Logging configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set
    pub level: LogLevel,
}

/// Log verbosity
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Lifecycle transitions
    #[default]
    Info,
    /// Every gateway call
    Debug,
    /// Per-frame and per-sample traffic
    Trace,
}

impl LogLevel {
    /// Filter string understood by `env_logger`
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
