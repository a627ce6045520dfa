//! Library component for the Mediatag CLI application.
//!
//! This contains the argument definitions, configuration resolution and
//! command logic that the binary crate uses.

/// Command-line interface definitions using clap
pub mod cli;

/// Command implementations for each subcommand
pub mod commands;

/// Effective configuration for a run
pub mod config;

/// Error handling utilities for the CLI
pub mod error;

/// Logger setup and helpers
pub mod logging;

/// Terminal output helpers
pub mod output;

// Re-exports for convenience
pub use cli::{BatchArgs, Cli, Commands, NameArgs, PostfixArgs, parse_cli, parse_cli_from};
pub use commands::run_command;
pub use config::resolve_config;
