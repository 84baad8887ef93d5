//! Command-line front end for the `acctag` tag grammar.
//!
//! The `acctag` binary parses tag expressions from its arguments and runs
//! one of the library operations on them:
//!
//! - `standardize` reduces each tag to its canonical form;
//! - `classify` reports the priority class of each tag;
//! - `expand` shows the long form with a slot per priority class;
//! - `transfer` moves modifiers from a source tag onto target tags;
//! - `rules` lists the identity rules.
//!
//! Results go to stdout as text or JSON. Diagnostics go to stderr through
//! `tracing`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
mod output;

use std::io::Write;

use eyre::{Context, Result};

use crate::cli::Cli;
use crate::commands::{Status, execute};
use crate::config::CliConfig;
use crate::error::CliError;

/// Build the configuration from the environment and the parsed arguments.
///
/// # Errors
///
/// Returns `CliError::InvalidConfig` if an environment variable holds an
/// invalid value.
pub fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config.apply_overrides(cli.log_level, cli.json))
}

/// Run the parsed command against `writer`.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn run(cli: &Cli, config: &CliConfig, writer: &mut dyn Write) -> Result<Status> {
    let status = execute(&cli.command, config, writer)?;
    writer.flush().wrap_err("failed to flush output")?;
    Ok(status)
}
