//! Main entry point for the Mediatag CLI application.
//!
//! This handles command-line argument parsing, configuration, logging setup
//! and dispatching to the command handlers. Exit status is 0 when every
//! request succeeded and 1 otherwise.

use std::process;

use mediatag::error::CliResult;
use mediatag::logging::{init_logging, log_level};
use mediatag::output::print_error;
use mediatag::{Cli, parse_cli, resolve_config, run_command};

fn run(cli: Cli) -> CliResult<bool> {
    let config = resolve_config(&cli)?;

    let level = log_level(cli.verbose);
    init_logging(level, config.log_dir.as_deref())?;
    log::debug!("Effective configuration: {:?}", config);

    run_command(&cli.command, &config)
}

fn main() {
    let cli = parse_cli();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            print_error(&e.to_string());
            process::exit(1);
        }
    }
}
