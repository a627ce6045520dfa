//! Output container formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    #[default]
    Mkv,
    Mp4,
}

impl Container {
    /// File extension without the leading dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Container::Mkv => "mkv",
            Container::Mp4 => "mp4",
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Container {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let ext = trimmed.strip_prefix('.').unwrap_or(trimmed);
        if ext.eq_ignore_ascii_case("mkv") {
            Ok(Container::Mkv)
        } else if ext.eq_ignore_ascii_case("mp4") {
            Ok(Container::Mp4)
        } else {
            Err(CoreError::UnrecognizedContainer(s.to_string()))
        }
    }
}
