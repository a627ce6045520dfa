//! Validated naming value types.
//!
//! Each type here is built through a single fallible factory and is immutable
//! afterwards:
//!
//! - [`BoundedInt`]: integers with a lower bound (`NonNegative`, `Positive`)
//! - [`Resolution`]: closed set of resolution categories
//! - [`Container`]: output container format
//! - [`MediaPostfix`]: `(resolution, fps, hdr)` and its derived postfix
//! - [`MediaFileName`]: title, year and postfix composed into a file name

pub mod bounded;
pub mod container;
pub mod file_name;
pub mod postfix;
pub mod resolution;

pub use bounded::{BoundedInt, NonNegative, Positive};
pub use container::Container;
pub use file_name::{MediaFileName, NameRequest};
pub use postfix::{MediaPostfix, POSTFIX_DELIMITER, SDR_MARKER, derive_postfix};
pub use resolution::Resolution;
