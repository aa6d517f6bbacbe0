//! Feature toggles for optional server functionality.

use clap::{ArgMatches, Command};

use super::ServerConfig;
use super::flags::{self, DeprecatedFlag};
use super::options::ServerOption;
use crate::{Error, Result};

const METRICS: &str = "metrics";
const PROFILING: &str = "profiling";
const CONTENTION_PROFILING: &str = "contention-profiling";
const WATERMARKS: &str = "watermarks";

/// Swagger 1.2 UI flag, accepted and ignored.
pub const ENABLE_SWAGGER_UI: DeprecatedFlag = DeprecatedFlag {
    name: "enable-swagger-ui",
    message: "swagger 1.2 support has been removed",
};

/// Command-line toggles for the server's diagnostic features.
///
/// Profiling and watermarks are only meaningful with metrics enabled, and
/// contention profiling only with profiling enabled. These dependencies are
/// advisory and are not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureOptions {
    /// Enable the profiling endpoint.
    pub enable_profiling: bool,
    /// Enable metrics collection.
    pub enable_metrics: bool,
    /// Enable lock contention profiling.
    pub enable_contention_profiling: bool,
    /// Enable watermark reporting.
    pub enable_watermarks: bool,
}

impl FeatureOptions {
    /// Creates options mirroring the default [`ServerConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::from_defaults(&ServerConfig::default())
    }

    /// Creates options mirroring the toggles of `defaults`.
    #[must_use]
    pub const fn from_defaults(defaults: &ServerConfig) -> Self {
        Self {
            enable_profiling: defaults.enable_profiling,
            enable_metrics: defaults.enable_metrics,
            enable_contention_profiling: defaults.enable_contention_profiling,
            enable_watermarks: defaults.enable_watermarks,
        }
    }

    /// Deprecated flags registered alongside the toggles.
    #[must_use]
    pub const fn deprecated_flags() -> &'static [DeprecatedFlag] {
        &[ENABLE_SWAGGER_UI]
    }
}

impl Default for FeatureOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerOption for FeatureOptions {
    fn add_flags(&self, command: Command) -> Command {
        command
            .arg(flags::bool_flag(METRICS, self.enable_metrics, "Enable metrics"))
            .arg(flags::bool_flag(
                PROFILING,
                self.enable_profiling,
                "Enable profiling via web interface host:port/debug/pprof/ - (requires that metrics is enabled)",
            ))
            .arg(flags::bool_flag(
                CONTENTION_PROFILING,
                self.enable_contention_profiling,
                "Enable lock contention profiling, if profiling is enabled",
            ))
            .arg(flags::bool_flag(
                WATERMARKS,
                self.enable_watermarks,
                "Enable watermarks, if metrics are enabled",
            ))
            .arg(flags::deprecated_bool_flag(
                ENABLE_SWAGGER_UI,
                "Enables swagger ui on the apiserver at /swagger-ui",
            ))
    }

    fn read_flags(&mut self, matches: &ArgMatches) {
        let targets = [
            (METRICS, &mut self.enable_metrics),
            (PROFILING, &mut self.enable_profiling),
            (CONTENTION_PROFILING, &mut self.enable_contention_profiling),
            (WATERMARKS, &mut self.enable_watermarks),
        ];
        for (name, field) in targets {
            if let Some(value) = flags::explicit_bool(matches, name) {
                *field = value;
            }
        }

        flags::warn_deprecated(matches, Self::deprecated_flags());
    }

    fn apply_to(&self, config: &mut ServerConfig) -> Result<()> {
        config.enable_metrics = self.enable_metrics;
        config.enable_profiling = self.enable_profiling;
        config.enable_contention_profiling = self.enable_contention_profiling;
        config.enable_watermarks = self.enable_watermarks;

        tracing::debug!(
            metrics = self.enable_metrics,
            profiling = self.enable_profiling,
            contention_profiling = self.enable_contention_profiling,
            watermarks = self.enable_watermarks,
            "Applied feature options"
        );

        Ok(())
    }

    fn validate(&self) -> Option<Vec<Error>> {
        Some(Vec::new())
    }
}
