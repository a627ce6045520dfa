// ============================================================================
// mediatag-cli/src/logging.rs
// ============================================================================
//
// LOGGING UTILITIES: Logger setup for the CLI
//
// With a log directory, records go to a timestamped run log via the core's
// log4rs setup. Otherwise fern sends them to stderr so stdout stays clean for
// results.

use log::LevelFilter;
use mediatag_core::CoreError;
use mediatag_core::file_logging::{run_log_file_name, setup_file_logging};
use std::path::{Path, PathBuf};

use crate::error::{CliErrorContext, CliResult};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Maps the verbose flag to a log level.
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger. Returns the run log path when logging to a file.
pub fn init_logging(level: LevelFilter, log_dir: Option<&Path>) -> CliResult<Option<PathBuf>> {
    match log_dir {
        Some(dir) => {
            let log_path = dir.join(run_log_file_name(&get_timestamp()));
            setup_file_logging(&log_path, level).cli_with_context(|| {
                format!("Failed to set up file logging to {}", log_path.display())
            })?;
            log::info!("Mediatag starting, logging to {}", log_path.display());
            Ok(Some(log_path))
        }
        None => {
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!("[{}] {}", record.level(), message))
                })
                .level(level)
                .chain(std::io::stderr())
                .apply()
                .map_err(|e| CoreError::Internal(format!("Failed to initialise logger: {e}")))?;
            Ok(None)
        }
    }
}
