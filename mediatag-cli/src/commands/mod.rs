//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific subcommand. Every
//! command returns `Ok(true)` when all of its work succeeded.

pub mod batch;
pub mod name;
pub mod postfix;

use log::warn;
use mediatag_core::{CoreConfig, CoreError, Resolution};

use crate::cli::Commands;
use crate::error::CliResult;

/// Dispatches a parsed subcommand.
pub fn run_command(command: &Commands, config: &CoreConfig) -> CliResult<bool> {
    match command {
        Commands::Postfix(args) => postfix::run_postfix(args, config),
        Commands::Name(args) => name::run_name(args, config),
        Commands::Batch(args) => batch::run_batch(args, config),
    }
}

/// Rejects (strict) or warns about (lenient) results with an unknown resolution.
pub fn check_resolution(config: &CoreConfig, resolution: Resolution, subject: &str) -> CliResult<()> {
    match resolution {
        Resolution::Unknown if config.strict => {
            Err(CoreError::StrictRejection(format!("'{subject}'")))
        }
        Resolution::Unknown => {
            warn!("'{}' has an unknown resolution; postfix carries no resolution token", subject);
            Ok(())
        }
        _ => Ok(()),
    }
}
