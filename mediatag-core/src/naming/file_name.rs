//! Canonical media file names.
//!
//! A file name is composed as `Title (Year).<postfix>.<ext>`, e.g.
//! `Heat (1995).1080p24.mkv`. The year and postfix parts are omitted when
//! absent or empty.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::bounded::Positive;
use super::container::Container;
use super::postfix::MediaPostfix;
use super::resolution::Resolution;
use crate::error::{CoreError, CoreResult, guard};

/// Raw, unvalidated naming inputs. This is the shape accepted by batch JSON.
///
/// `resolution` stays a raw string so an unrecognized token fails only its own
/// request when the name is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NameRequest {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub resolution: Option<String>,
    #[serde(alias = "fps")]
    pub frame_rate: i64,
    pub hdr: bool,
    pub container: Option<Container>,
}

impl NameRequest {
    pub fn new(title: impl Into<String>, resolution: Resolution) -> Self {
        Self {
            title: Some(title.into()),
            resolution: Some(resolution.to_string()),
            ..Self::default()
        }
    }

    pub fn year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    pub fn frame_rate(mut self, frame_rate: i64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn hdr(mut self, hdr: bool) -> Self {
        self.hdr = hdr;
        self
    }

    pub fn container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }
}

/// Validated media file name. Only obtainable through [`MediaFileName::create`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MediaFileName {
    title: String,
    year: Option<Positive>,
    postfix: MediaPostfix,
    container: Container,
}

impl MediaFileName {
    /// Validates `request` and builds the file name.
    ///
    /// `default_container` is used when the request names none. Checks run in
    /// order, first failure wins: title, year bound, then the nested year and
    /// postfix values.
    pub fn create(request: &NameRequest, default_container: Container) -> CoreResult<Self> {
        guard("media file name", || {
            let title = request
                .title
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .ok_or(CoreError::MissingRequiredInput { field: "title" })?;
            validate_title(title)?;

            if let Some(year) = request.year.filter(|y| *y < Positive::LOWER_BOUND) {
                return Err(CoreError::OutOfRangeNumericInput {
                    field: "year",
                    min: Positive::LOWER_BOUND,
                    value: year,
                });
            }

            let year = request
                .year
                .map(Positive::new)
                .transpose()
                .map_err(|e| e.nested("year"))?;

            let postfix = request
                .resolution
                .as_deref()
                .map(str::parse::<Resolution>)
                .transpose()
                .and_then(|resolution| {
                    MediaPostfix::create(resolution, request.frame_rate, request.hdr)
                })
                .map_err(|e| e.nested("postfix"))?;

            Ok(Self {
                title: title.to_string(),
                year,
                postfix,
                container: request.container.unwrap_or(default_container),
            })
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn year(&self) -> Option<Positive> {
        self.year
    }

    #[must_use]
    pub fn postfix(&self) -> &MediaPostfix {
        &self.postfix
    }

    #[must_use]
    pub fn container(&self) -> Container {
        self.container
    }

    /// File name without the extension.
    #[must_use]
    pub fn stem(&self) -> String {
        let mut stem = self.title.clone();
        if let Some(year) = self.year {
            stem.push_str(&format!(" ({year})"));
        }
        stem.push_str(&self.postfix.value_with_delimiter());
        stem
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.stem(), self.container.extension())
    }
}

impl fmt::Display for MediaFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

fn validate_title(title: &str) -> CoreResult<()> {
    if let Some(c) = title.chars().find(|c| matches!(c, '/' | '\\')) {
        return Err(CoreError::InvalidInput {
            field: "title",
            reason: format!("contains path separator '{c}'"),
        });
    }
    if title.chars().any(char::is_control) {
        return Err(CoreError::InvalidInput {
            field: "title",
            reason: "contains control characters".to_string(),
        });
    }
    Ok(())
}
