//! Media postfix derivation.
//!
//! A postfix is the canonical token appended to a media file stem, built from
//! a resolution category, a frame rate and an HDR flag:
//!
//! | resolution | fps | hdr   | postfix   |
//! |------------|-----|-------|-----------|
//! | 1080p      | 60  | false | `1080p60` |
//! | 4K         | 0   | false | `4K-SDR`  |
//! | 4K         | 60  | true  | `4K60`    |
//! | 2K         | 0   | false | `2K`      |
//!
//! High tier resolutions are assumed to be HDR, so the marker is only written
//! when a high tier source is explicitly SDR.

use std::fmt;

use serde::Serialize;

use super::bounded::NonNegative;
use super::resolution::Resolution;
use crate::error::{CoreError, CoreResult, guard};

/// Marker appended to high tier postfixes for SDR content.
pub const SDR_MARKER: &str = "-SDR";

/// Delimiter placed between a file stem and its postfix.
pub const POSTFIX_DELIMITER: char = '.';

/// Builds the postfix token. Total over its inputs; never fails.
#[must_use]
pub fn derive_postfix(resolution: Resolution, frame_rate: NonNegative, hdr: bool) -> String {
    let mut postfix = String::from(resolution.token());

    // A zero frame rate means "not applicable" and is dropped.
    if !frame_rate.is_zero() {
        postfix.push_str(&frame_rate.to_string());
    }

    if !hdr && resolution.is_high_tier() {
        postfix.push_str(SDR_MARKER);
    }

    postfix
}

/// Validated postfix descriptor. Only obtainable through [`MediaPostfix::create`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MediaPostfix {
    resolution: Resolution,
    frame_rate: NonNegative,
    hdr: bool,
    value: String,
}

impl MediaPostfix {
    /// Validates the raw inputs and derives the postfix.
    ///
    /// Checks run in order and the first failure is returned:
    /// 1. `resolution` must be present.
    /// 2. `frame_rate` must not be negative.
    /// 3. the frame rate must build a [`NonNegative`].
    pub fn create(resolution: Option<Resolution>, frame_rate: i64, hdr: bool) -> CoreResult<Self> {
        guard("media postfix", || {
            let resolution =
                resolution.ok_or(CoreError::MissingRequiredInput { field: "resolution" })?;

            if frame_rate < NonNegative::LOWER_BOUND {
                return Err(CoreError::OutOfRangeNumericInput {
                    field: "frame rate",
                    min: NonNegative::LOWER_BOUND,
                    value: frame_rate,
                });
            }

            let frame_rate = NonNegative::new(frame_rate).map_err(|e| e.nested("frame rate"))?;

            let value = derive_postfix(resolution, frame_rate, hdr);
            if value.is_empty() {
                log::warn!("Resolution {} has no token; postfix is empty", resolution);
            }
            log::debug!(
                "Derived postfix '{}' (resolution={}, fps={}, hdr={})",
                value,
                resolution,
                frame_rate,
                hdr
            );

            Ok(Self {
                resolution,
                frame_rate,
                hdr,
                value,
            })
        })
    }

    /// Like [`MediaPostfix::create`], classifying the resolution from pixel dimensions.
    pub fn from_dimensions(width: u32, height: u32, frame_rate: i64, hdr: bool) -> CoreResult<Self> {
        Self::create(Some(Resolution::from_dimensions(width, height)), frame_rate, hdr)
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn frame_rate(&self) -> NonNegative {
        self.frame_rate
    }

    #[must_use]
    pub fn is_hdr(&self) -> bool {
        self.hdr
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The postfix prefixed with [`POSTFIX_DELIMITER`], or `""` for an empty postfix.
    #[must_use]
    pub fn value_with_delimiter(&self) -> String {
        if self.value.is_empty() {
            String::new()
        } else {
            format!("{POSTFIX_DELIMITER}{}", self.value)
        }
    }
}

impl fmt::Display for MediaPostfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fps(value: i64) -> NonNegative {
        NonNegative::new(value).unwrap()
    }

    #[test]
    fn derivation_examples() {
        assert_eq!(derive_postfix(Resolution::FullHd, fps(60), false), "1080p60");
        assert_eq!(derive_postfix(Resolution::Uhd4k, fps(0), false), "4K-SDR");
        assert_eq!(derive_postfix(Resolution::Uhd4k, fps(60), true), "4K60");
        assert_eq!(derive_postfix(Resolution::Hd2k, fps(0), false), "2K");
        assert_eq!(derive_postfix(Resolution::Unknown, fps(30), false), "30");
        assert_eq!(derive_postfix(Resolution::Uhd8k, fps(24), false), "8K24-SDR");
    }

    #[test]
    fn marker_only_on_high_tier() {
        for resolution in Resolution::ALL {
            for hdr in [false, true] {
                let postfix = derive_postfix(resolution, fps(25), hdr);
                let marked = postfix.ends_with(SDR_MARKER);
                assert_eq!(marked, resolution.is_high_tier() && !hdr, "{postfix}");
            }
        }
    }

    #[test]
    fn zero_frame_rate_is_dropped() {
        assert_eq!(derive_postfix(Resolution::Hd720, fps(0), true), "720p");
        assert_eq!(derive_postfix(Resolution::Unknown, fps(0), false), "");
    }

    #[test]
    fn create_missing_resolution() {
        let err = MediaPostfix::create(None, 60, true).unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingRequiredInput { field: "resolution" }
        ));
        assert_eq!(err.to_string(), "resolution is required");
    }

    #[test]
    fn missing_resolution_wins_over_bad_frame_rate() {
        let err = MediaPostfix::create(None, -5, false).unwrap_err();
        assert_eq!(err.to_string(), "resolution is required");
    }

    #[test]
    fn create_negative_frame_rate() {
        let err = MediaPostfix::create(Some(Resolution::FullHd), -1, false).unwrap_err();
        assert_eq!(err.to_string(), "frame rate must be at least 0, got -1");
    }

    #[test]
    fn create_populates_fields() {
        let postfix = MediaPostfix::create(Some(Resolution::FullHd), 60, false).unwrap();
        assert_eq!(postfix.resolution(), Resolution::FullHd);
        assert_eq!(postfix.frame_rate().get(), 60);
        assert!(!postfix.is_hdr());
        assert_eq!(postfix.value(), "1080p60");
        assert_eq!(postfix.value_with_delimiter(), ".1080p60");
        assert_eq!(postfix.to_string(), "1080p60");
    }

    #[test]
    fn empty_postfix_has_no_delimiter() {
        let postfix = MediaPostfix::create(Some(Resolution::Unknown), 0, false).unwrap();
        assert!(postfix.is_empty());
        assert_eq!(postfix.value_with_delimiter(), "");
    }

    #[test]
    fn create_is_idempotent() {
        let a = MediaPostfix::create(Some(Resolution::Uhd4k), 24, false).unwrap();
        let b = MediaPostfix::create(Some(Resolution::Uhd4k), 24, false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn from_dimensions_classifies() {
        let postfix = MediaPostfix::from_dimensions(3840, 2160, 0, false).unwrap();
        assert_eq!(postfix.value(), "4K-SDR");
    }

    #[test]
    fn serializes_derived_value() {
        let postfix = MediaPostfix::create(Some(Resolution::Uhd4k), 60, true).unwrap();
        let json = serde_json::to_value(&postfix).unwrap();
        assert_eq!(json["value"], "4K60");
        assert_eq!(json["resolution"], "4K");
        assert_eq!(json["frame_rate"], 60);
        assert_eq!(json["hdr"], true);
    }
}
