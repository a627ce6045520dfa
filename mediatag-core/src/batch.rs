//! Batch naming.
//!
//! Reads a JSON array of [`NameRequest`]s and builds every file name in
//! parallel. Value construction has no shared state, so requests are handed
//! to rayon as-is; output order always matches input order.

use std::fmt;
use std::fs;
use std::path::Path;

use log::info;
use rayon::prelude::*;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::CoreResult;
use crate::naming::{Container, MediaFileName, NameRequest};

/// Result of one batch request, tagged with its position in the input.
#[derive(Debug)]
pub struct BatchOutcome {
    pub index: usize,
    pub result: CoreResult<MediaFileName>,
}

impl BatchOutcome {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

impl Serialize for BatchOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BatchOutcome", 3)?;
        state.serialize_field("index", &self.index)?;
        match &self.result {
            Ok(name) => {
                state.serialize_field("file_name", &name.file_name())?;
                state.serialize_field("postfix", name.postfix().value())?;
            }
            Err(e) => state.serialize_field("error", &e.to_string())?,
        }
        state.end()
    }
}

/// Success/failure counts for a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} request(s): {} named, {} failed",
            self.total, self.succeeded, self.failed
        )
    }
}

/// Parses a JSON array of naming requests.
pub fn parse_requests(json: &str) -> CoreResult<Vec<NameRequest>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a JSON request file.
pub fn read_requests(path: &Path) -> CoreResult<Vec<NameRequest>> {
    let contents = fs::read_to_string(path)?;
    parse_requests(&contents)
}

/// Builds a file name for every request, preserving input order.
pub fn name_all(requests: &[NameRequest], default_container: Container) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = requests
        .par_iter()
        .enumerate()
        .map(|(index, request)| BatchOutcome {
            index,
            result: MediaFileName::create(request, default_container),
        })
        .collect();

    info!("Batch naming finished: {}", summarize(&outcomes));
    outcomes
}

#[must_use]
pub fn summarize(outcomes: &[BatchOutcome]) -> BatchSummary {
    let succeeded = outcomes.iter().filter(|o| o.is_ok()).count();
    BatchSummary {
        total: outcomes.len(),
        succeeded,
        failed: outcomes.len() - succeeded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_requests_with_defaults() {
        let requests = parse_requests(
            r#"[{"title": "Heat", "year": 1995, "resolution": "1080p", "fps": 24},
                {"title": "Baraka", "resolution": "4K", "hdr": true}]"#,
        )
        .unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].frame_rate, 24);
        assert!(!requests[0].hdr);
        assert_eq!(requests[1].year, None);
        assert_eq!(requests[1].container, None);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = parse_requests(r#"[{"title": "Heat", "framerate": 24}]"#).unwrap_err();
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn summary_counts() {
        let requests = vec![
            NameRequest::new("Heat", crate::naming::Resolution::FullHd),
            NameRequest::default(),
        ];
        let outcomes = name_all(&requests, Container::Mkv);
        let summary = summarize(&outcomes);
        assert_eq!(
            summary,
            BatchSummary {
                total: 2,
                succeeded: 1,
                failed: 1
            }
        );
        assert_eq!(summary.to_string(), "2 request(s): 1 named, 1 failed");
    }

    #[test]
    fn serializes_outcomes() {
        let requests = vec![
            NameRequest::new("Heat", crate::naming::Resolution::FullHd).frame_rate(24),
            NameRequest::default(),
        ];
        let outcomes = name_all(&requests, Container::Mkv);
        let json = serde_json::to_value(&outcomes).unwrap();
        assert_eq!(json[0]["index"], 0);
        assert_eq!(json[0]["file_name"], "Heat.1080p24.mkv");
        assert_eq!(json[0]["postfix"], "1080p24");
        assert_eq!(json[1]["error"], "title is required");
        assert!(json[1].get("file_name").is_none());
    }
}
