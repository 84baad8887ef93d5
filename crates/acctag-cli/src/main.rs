//! Entry point of the `acctag` binary.
//!
//! Exit codes: `0` when every tag was processed, `1` when a tag failed or the
//! output could not be written, `2` when the configuration is invalid.

use std::io;
use std::process::ExitCode;

use acctag_cli::cli::Cli;
use acctag_cli::config::CliConfig;
use acctag_cli::logging::init_logging;
use acctag_cli::{build_config, run};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    let mut stdout = io::stdout().lock();
    match run(&cli, &config, &mut stdout) {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(e) => {
            tracing::error!(error = ?e, "command failed");
            ExitCode::from(1)
        }
    }
}
