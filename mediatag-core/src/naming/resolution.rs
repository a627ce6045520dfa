//! Resolution categories and their canonical tokens.
//!
//! The set is closed: every consumer matches exhaustively, so a new variant is
//! a compile error at each site rather than a silent fallthrough.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Minimum width (in pixels) for Ultra High Definition 8K content.
pub const UHD8K_WIDTH_THRESHOLD: u32 = 7680;

/// Minimum width (in pixels) for Ultra High Definition 4K content.
pub const UHD_WIDTH_THRESHOLD: u32 = 3840;

/// Minimum width (in pixels) for DCI 2K content.
pub const DCI2K_WIDTH_THRESHOLD: u32 = 2048;

/// Minimum width (in pixels) for Full HD content.
pub const HD_WIDTH_THRESHOLD: u32 = 1920;

/// Minimum width (in pixels) for 720p content.
pub const HD720_WIDTH_THRESHOLD: u32 = 1280;

/// Minimum width (in pixels) for Standard Definition content.
pub const SD_WIDTH_THRESHOLD: u32 = 640;

/// Resolution category of a video.
///
/// Serializes as the canonical token; deserializes through [`FromStr`], so
/// JSON input accepts the same spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Resolution {
    #[serde(rename = "480p")]
    Sd480,
    #[serde(rename = "720p")]
    Hd720,
    #[serde(rename = "1080p")]
    FullHd,
    #[serde(rename = "2K")]
    Hd2k,
    #[serde(rename = "4K")]
    Uhd4k,
    #[serde(rename = "8K")]
    Uhd8k,
    /// No recognised category. Maps to an empty token.
    #[serde(rename = "unknown")]
    Unknown,
}

impl Resolution {
    /// All categories in ascending order.
    pub const ALL: [Resolution; 7] = [
        Resolution::Unknown,
        Resolution::Sd480,
        Resolution::Hd720,
        Resolution::FullHd,
        Resolution::Hd2k,
        Resolution::Uhd4k,
        Resolution::Uhd8k,
    ];

    /// Base token used when building a postfix.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Resolution::Sd480 => "480p",
            Resolution::Hd720 => "720p",
            Resolution::FullHd => "1080p",
            Resolution::Hd2k => "2K",
            Resolution::Uhd4k => "4K",
            Resolution::Uhd8k => "8K",
            Resolution::Unknown => "",
        }
    }

    /// High tier categories are assumed HDR unless told otherwise.
    #[must_use]
    pub fn is_high_tier(self) -> bool {
        match self {
            Resolution::Uhd4k | Resolution::Uhd8k => true,
            Resolution::Sd480
            | Resolution::Hd720
            | Resolution::FullHd
            | Resolution::Hd2k
            | Resolution::Unknown => false,
        }
    }

    fn rank(self) -> u8 {
        match self {
            Resolution::Unknown => 0,
            Resolution::Sd480 => 1,
            Resolution::Hd720 => 2,
            Resolution::FullHd => 3,
            Resolution::Hd2k => 4,
            Resolution::Uhd4k => 5,
            Resolution::Uhd8k => 6,
        }
    }

    /// Classifies pixel dimensions.
    ///
    /// Width decides the tier so cropped (letterboxed) sources keep it; height
    /// can only raise it, which covers pillarboxed and portrait material.
    #[must_use]
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        let by_width = if width >= UHD8K_WIDTH_THRESHOLD {
            Resolution::Uhd8k
        } else if width >= UHD_WIDTH_THRESHOLD {
            Resolution::Uhd4k
        } else if width >= DCI2K_WIDTH_THRESHOLD {
            Resolution::Hd2k
        } else if width >= HD_WIDTH_THRESHOLD {
            Resolution::FullHd
        } else if width >= HD720_WIDTH_THRESHOLD {
            Resolution::Hd720
        } else if width >= SD_WIDTH_THRESHOLD {
            Resolution::Sd480
        } else {
            Resolution::Unknown
        };

        let by_height = match height {
            4320.. => Resolution::Uhd8k,
            2160.. => Resolution::Uhd4k,
            1080.. => Resolution::FullHd,
            720.. => Resolution::Hd720,
            480.. => Resolution::Sd480,
            _ => Resolution::Unknown,
        };

        if by_height.rank() > by_width.rank() {
            by_height
        } else {
            by_width
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Unknown => write!(f, "unknown"),
            known => write!(f, "{}", known.token()),
        }
    }
}

impl FromStr for Resolution {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "480p" | "sd" | "sd480" => Ok(Resolution::Sd480),
            "720p" | "hd" | "hd720" => Ok(Resolution::Hd720),
            "1080p" | "fullhd" | "fhd" => Ok(Resolution::FullHd),
            "2k" | "hd2k" => Ok(Resolution::Hd2k),
            "4k" | "uhd" | "uhd4k" | "2160p" => Ok(Resolution::Uhd4k),
            "8k" | "uhd8k" | "4320p" => Ok(Resolution::Uhd8k),
            "unknown" => Ok(Resolution::Unknown),
            _ => Err(CoreError::UnrecognizedResolution(s.to_string())),
        }
    }
}

impl TryFrom<String> for Resolution {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
