//! File-based logging for mediatag runs.

pub mod setup;

pub use setup::{LOG_PATTERN, run_log_file_name, setup_file_logging};
