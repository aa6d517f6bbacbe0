//! Boolean flag helpers for `clap`.
//!
//! Flags built here behave like classic Go-style boolean flags: `--name`
//! alone sets `true`, an explicit value must be attached with `=`, and the
//! value accepts the usual spellings (`1`, `t`, `TRUE`, `false`, ...).

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches};

use crate::observability::DEPRECATION_TARGET;

/// Help heading under which feature flags are grouped.
pub const FEATURES_HEADING: &str = "Features";

/// A flag kept for command-line compatibility after its feature was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeprecatedFlag {
    /// Long flag name without the leading dashes.
    pub name: &'static str,
    /// Explanation appended to the deprecation warning.
    pub message: &'static str,
}

impl DeprecatedFlag {
    /// Returns the warning logged when the flag is used.
    #[must_use]
    pub fn warning(&self) -> String {
        format!("Flag --{} has been deprecated, {}", self.name, self.message)
    }
}

/// Parses a boolean flag value.
///
/// # Errors
///
/// Returns an error message if `value` is not a recognized boolean spelling.
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(format!("invalid boolean value '{other}'")),
    }
}

/// Renders a bool as a flag default value.
const fn bool_literal(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Builds a boolean flag whose default is `default`.
///
/// Repeating the flag is allowed; the last occurrence wins.
#[must_use]
pub fn bool_flag(name: &'static str, default: bool, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .help_heading(FEATURES_HEADING)
        .action(ArgAction::Set)
        .num_args(0..=1)
        .require_equals(true)
        .value_name("BOOL")
        .default_value(bool_literal(default))
        .default_missing_value("true")
        .value_parser(parse_bool)
        .overrides_with(name)
}

/// Builds a hidden boolean flag for a deprecated option.
#[must_use]
pub fn deprecated_bool_flag(flag: DeprecatedFlag, help: &'static str) -> Arg {
    bool_flag(flag.name, false, help).hide(true)
}

/// Returns true if `name` was given explicitly on the command line.
///
/// Flags that were never registered on the command report `false`.
fn set_on_command_line(matches: &ArgMatches, name: &str) -> bool {
    matches.try_contains_id(name).unwrap_or(false)
        && matches.value_source(name) == Some(ValueSource::CommandLine)
}

/// Returns the parsed value of `name` if it was given on the command line.
#[must_use]
pub(crate) fn explicit_bool(matches: &ArgMatches, name: &str) -> Option<bool> {
    if !set_on_command_line(matches, name) {
        return None;
    }
    matches.try_get_one::<bool>(name).ok().flatten().copied()
}

/// Logs a warning for each deprecated flag present on the command line.
///
/// Events use [`DEPRECATION_TARGET`], which logging keeps at warn level
/// regardless of the configured filter. Returns the flags that were used.
pub(crate) fn warn_deprecated(
    matches: &ArgMatches,
    flags: &[DeprecatedFlag],
) -> Vec<DeprecatedFlag> {
    let used: Vec<DeprecatedFlag> = flags
        .iter()
        .copied()
        .filter(|flag| set_on_command_line(matches, flag.name))
        .collect();
    for flag in &used {
        tracing::warn!(
            target: DEPRECATION_TARGET,
            flag = flag.name,
            "{}",
            flag.warning()
        );
    }
    used
}
