//! Core library for canonical media file naming.
//!
//! This crate provides validated value types for media naming: a resolution
//! category, bounded integers, a postfix derived from resolution, frame rate
//! and HDR state, and full file names built on top of it. Every value type is
//! obtained through a single fallible factory and is immutable afterwards.
//!
//! ## Usage Example
//!
//! ```rust
//! use mediatag_core::{Container, MediaFileName, MediaPostfix, NameRequest, Resolution};
//!
//! let postfix = MediaPostfix::create(Some(Resolution::Uhd4k), 0, false).unwrap();
//! assert_eq!(postfix.value(), "4K-SDR");
//!
//! let request = NameRequest::new("Heat", Resolution::FullHd).year(1995).frame_rate(24);
//! let name = MediaFileName::create(&request, Container::Mkv).unwrap();
//! assert_eq!(name.file_name(), "Heat (1995).1080p24.mkv");
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod file_logging;
pub mod naming;

// Re-exports for public API
pub use batch::{BatchOutcome, BatchSummary, name_all, parse_requests, read_requests, summarize};
pub use config::{CoreConfig, CoreConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use naming::{
    BoundedInt, Container, MediaFileName, MediaPostfix, NameRequest, NonNegative, Positive,
    Resolution, derive_postfix,
};
