// mediatag-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use mediatag_core::{Container, Resolution};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Mediatag: canonical media file naming",
    long_about = "Derives resolution/frame-rate/HDR postfixes and canonical file names \
                  for media files via the mediatag-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Treat an unknown resolution as an error instead of a warning
    #[arg(long, global = true)]
    pub strict: bool,

    /// Optional: Directory for run log files (logs go to stderr otherwise)
    #[arg(long, global = true, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Optional: JSON configuration file
    #[arg(long, global = true, value_name = "FILE", env = "MEDIATAG_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derives the postfix for a resolution, frame rate and HDR flag
    Postfix(PostfixArgs),
    /// Builds a full file name from a title, year and source properties
    Name(NameArgs),
    /// Names every request in a JSON file (use '-' for stdin)
    Batch(BatchArgs),
}

/// Source properties shared by `postfix` and `name`.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Resolution category (480p, 720p, 1080p, 2K, 4K, 8K, unknown)
    #[arg(short, long, value_name = "RES", conflicts_with_all = ["width", "height"])]
    pub resolution: Option<Resolution>,

    /// Frame width in pixels, classified into a resolution category
    #[arg(long, value_name = "PIXELS", requires = "height")]
    pub width: Option<u32>,

    /// Frame height in pixels
    #[arg(long, value_name = "PIXELS", requires = "width")]
    pub height: Option<u32>,

    /// Frame rate; 0 leaves it out of the postfix
    #[arg(long = "fps", value_name = "FPS", default_value_t = 0, allow_negative_numbers = true)]
    pub frame_rate: i64,

    /// Source is HDR
    #[arg(long)]
    pub hdr: bool,
}

impl SourceArgs {
    /// The explicit resolution, or one classified from the dimensions.
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution.or(match (self.width, self.height) {
            (Some(width), Some(height)) => Some(Resolution::from_dimensions(width, height)),
            _ => None,
        })
    }
}

#[derive(Args, Debug, Clone)]
pub struct PostfixArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the postfix with its leading delimiter
    #[arg(long)]
    pub delimited: bool,
}

#[derive(Args, Debug, Clone)]
pub struct NameArgs {
    /// Title of the work
    #[arg(short, long)]
    pub title: Option<String>,

    /// Release year
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i64>,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Output container (mkv, mp4); defaults to the configured container
    #[arg(short, long)]
    pub container: Option<Container>,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// JSON file holding an array of requests, or '-' for stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

/// Parses the process arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses arguments from an iterator, for tests.
pub fn parse_cli_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
