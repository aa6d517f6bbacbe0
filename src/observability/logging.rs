//! Structured logging configuration.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

/// Target of deprecated-flag warnings.
///
/// Always enabled at warn level, whatever `RUST_LOG` or verbosity say.
pub const DEPRECATION_TARGET: &str = "featopts::deprecation";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Event filter.
    pub filter: EnvFilter,
}

impl LoggingConfig {
    /// Builds logging configuration, honoring `RUST_LOG` when set.
    ///
    /// Without `RUST_LOG` the level is `info`, or `debug` when `verbose`.
    #[must_use]
    pub fn new(format: LogFormat, verbose: bool) -> Self {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
        Self {
            format,
            filter: with_deprecations(filter),
        }
    }
}

fn with_deprecations(filter: EnvFilter) -> EnvFilter {
    match format!("{DEPRECATION_TARGET}=warn").parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}
