//! Configuration management.
//!
//! [`ServerConfig`] is the configuration a server runs with. Its defaults are
//! the baseline that [`FeatureOptions`] mirrors before flags are parsed.
//!
//! # Example TOML
//!
//! ```toml
//! [features]
//! metrics = true
//! profiling = false
//! contention_profiling = false
//! watermarks = true
//! ```

mod features;
mod flags;
mod options;

pub use features::{ENABLE_SWAGGER_UI, FeatureOptions};
pub use flags::{
    DeprecatedFlag, FEATURES_HEADING, bool_flag, deprecated_bool_flag, parse_bool,
};
pub use options::ServerOption;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Server runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    /// Serve the profiling endpoint.
    pub enable_profiling: bool,
    /// Collect metrics.
    pub enable_metrics: bool,
    /// Record lock contention in profiles.
    pub enable_contention_profiling: bool,
    /// Report resource usage watermarks.
    pub enable_watermarks: bool,
    /// Serve the path index at `/`.
    pub enable_index: bool,
    /// Serve API discovery endpoints.
    pub enable_discovery: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            enable_profiling: true,
            enable_metrics: true,
            enable_contention_profiling: false,
            enable_watermarks: false,
            enable_index: true,
            enable_discovery: true,
        }
    }
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Feature toggles.
    pub features: Option<ConfigFileFeatures>,
}

/// Features section in config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFileFeatures {
    /// Profiling endpoint.
    pub profiling: Option<bool>,
    /// Metrics collection.
    pub metrics: Option<bool>,
    /// Lock contention profiling.
    pub contention_profiling: Option<bool>,
    /// Watermark reporting.
    pub watermarks: Option<bool>,
    /// Path index.
    pub index: Option<bool>,
    /// API discovery.
    pub discovery: Option<bool>,
}

impl ServerConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        let config = Self::from_toml(&contents)?;
        tracing::debug!(path = %path.display(), "Loaded server config");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if the text is not a valid config file.
    pub fn from_toml(contents: &str) -> crate::Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| crate::Error::InvalidInput(e.to_string()))?;
        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/Library/Application Support/featopts/` on macOS)
    /// 2. XDG config dir (`~/.config/featopts/` for Unix compatibility)
    ///
    /// Returns default configuration if no config file is found.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = [
            base_dirs.config_dir().join("featopts").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("featopts")
                .join("config.toml"),
        ];

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "Ignoring config file"),
            }
        }

        Self::default()
    }

    /// Converts a `ConfigFile` to `ServerConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let mut config = Self::default();

        if let Some(features) = file.features {
            let targets = [
                (features.profiling, &mut config.enable_profiling),
                (features.metrics, &mut config.enable_metrics),
                (
                    features.contention_profiling,
                    &mut config.enable_contention_profiling,
                ),
                (features.watermarks, &mut config.enable_watermarks),
                (features.index, &mut config.enable_index),
                (features.discovery, &mut config.enable_discovery),
            ];
            for (value, field) in targets {
                if let Some(v) = value {
                    *field = v;
                }
            }
        }

        config
    }
}
