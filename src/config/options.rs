//! The options-binding contract.
//!
//! An option set registers its flags on a `clap::Command`, reads the parsed
//! values back, and copies them onto a [`ServerConfig`]. An absent option set
//! (`None`) is valid everywhere and does nothing.

use clap::{ArgMatches, Command};

use super::ServerConfig;
use crate::{Error, Result};

/// A group of command-line options that configures part of a server.
pub trait ServerOption {
    /// Registers this option set's flags on `command`.
    ///
    /// Each flag's default is the option's current value.
    #[must_use]
    fn add_flags(&self, command: Command) -> Command;

    /// Copies values given on the command line back into the option set.
    ///
    /// Flags not given explicitly leave the current values untouched.
    fn read_flags(&mut self, matches: &ArgMatches);

    /// Copies the option values onto `config`.
    ///
    /// # Errors
    ///
    /// Implementations may reject values that cannot be applied.
    fn apply_to(&self, config: &mut ServerConfig) -> Result<()>;

    /// Validates the option set.
    ///
    /// Returns `None` when there is nothing to validate, otherwise the
    /// (possibly empty) list of problems found.
    fn validate(&self) -> Option<Vec<Error>>;
}

impl<T: ServerOption> ServerOption for Option<T> {
    fn add_flags(&self, command: Command) -> Command {
        match self {
            Some(options) => options.add_flags(command),
            None => command,
        }
    }

    fn read_flags(&mut self, matches: &ArgMatches) {
        if let Some(options) = self {
            options.read_flags(matches);
        }
    }

    fn apply_to(&self, config: &mut ServerConfig) -> Result<()> {
        match self {
            Some(options) => options.apply_to(config),
            None => Ok(()),
        }
    }

    fn validate(&self) -> Option<Vec<Error>> {
        self.as_ref().and_then(ServerOption::validate)
    }
}
