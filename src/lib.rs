//! # Featopts
//!
//! Server feature toggles bound to command-line flags.
//!
//! A server bootstrap constructs a [`FeatureOptions`] from its baseline
//! [`ServerConfig`], registers the toggles as `clap` flags, reads them back
//! after parsing, and applies them onto the configuration the server runs with.
//!
//! ## Flags
//!
//! | Flag | Effect |
//! |------|--------|
//! | `--metrics` | Enable metrics collection |
//! | `--profiling` | Enable the profiling endpoint (requires metrics) |
//! | `--contention-profiling` | Enable lock contention profiling (requires profiling) |
//! | `--watermarks` | Enable watermark reporting (requires metrics) |
//! | `--enable-swagger-ui` | Deprecated, accepted and ignored |
//!
//! ## Example
//!
//! ```rust
//! use clap::Command;
//! use featopts::{FeatureOptions, ServerConfig, ServerOption};
//!
//! let mut options = FeatureOptions::new();
//! let matches = options
//!     .add_flags(Command::new("server"))
//!     .try_get_matches_from(["server", "--metrics=false", "--profiling"])
//!     .unwrap();
//! options.read_flags(&matches);
//!
//! let mut config = ServerConfig::default();
//! options.apply_to(&mut config).unwrap();
//! assert!(!config.enable_metrics);
//! assert!(config.enable_profiling);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod observability;

// Re-exports for convenience
pub use config::{DeprecatedFlag, FeatureOptions, ServerConfig, ServerOption};

/// Error type for featopts operations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Config file content is not valid TOML or has mistyped keys |
/// | `OperationFailed` | Config file cannot be read, logging cannot be initialized |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A config file fails to parse
    /// - A `[features]` key holds a non-boolean value
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Filesystem I/O errors occur while reading configuration
    /// - The logging subscriber is installed twice
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for featopts operations.
pub type Result<T> = std::result::Result<T, Error>;
