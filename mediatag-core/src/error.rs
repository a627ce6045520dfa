//! Error types for the mediatag-core library.
//!
//! Every failure a factory can report is a variant of [`CoreError`]. Messages
//! are stable templates so callers and tests can match on exact text.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

/// Errors produced by mediatag-core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A required input was absent (e.g. no resolution category).
    #[error("{field} is required")]
    MissingRequiredInput { field: &'static str },

    /// A numeric input fell below its lower bound.
    #[error("{field} must be at least {min}, got {value}")]
    OutOfRangeNumericInput {
        field: &'static str,
        min: i64,
        value: i64,
    },

    /// A nested value type rejected its input.
    #[error("invalid {field}: {source}")]
    NestedValidationFailure {
        field: &'static str,
        source: Box<CoreError>,
    },

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Unrecognized resolution: {0}")]
    UnrecognizedResolution(String),

    #[error("Unrecognized container: {0}")]
    UnrecognizedContainer(String),

    /// Raised by consumers running in strict mode for lenient results.
    #[error("strict mode: {0} has an unknown resolution")]
    StrictRejection(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Infrastructure fault caught at a construction boundary.
    #[error("Unexpected error: {0}")]
    Internal(String),
}

/// Result type for mediatag-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Wraps `self` as the cause of a nested validation failure on `field`.
    pub fn nested(self, field: &'static str) -> Self {
        CoreError::NestedValidationFailure {
            field,
            source: Box::new(self),
        }
    }
}

/// Runs a construction body, converting an unwinding panic into
/// [`CoreError::Internal`] so callers only ever see the `CoreResult` channel.
pub fn guard<T, F>(operation: &str, body: F) -> CoreResult<T>
where
    F: FnOnce() -> CoreResult<T>,
{
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            log::error!("{} aborted: {}", operation, message);
            Err(CoreError::Internal(format!("{operation}: {message}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        let missing = CoreError::MissingRequiredInput { field: "resolution" };
        assert_eq!(missing.to_string(), "resolution is required");

        let range = CoreError::OutOfRangeNumericInput {
            field: "frame rate",
            min: 0,
            value: -1,
        };
        assert_eq!(range.to_string(), "frame rate must be at least 0, got -1");
    }

    #[test]
    fn nested_wraps_inner_message() {
        let inner = CoreError::MissingRequiredInput { field: "resolution" };
        let outer = inner.nested("postfix");
        assert_eq!(outer.to_string(), "invalid postfix: resolution is required");
        assert!(matches!(outer, CoreError::NestedValidationFailure { field: "postfix", .. }));
        assert!(std::error::Error::source(&outer).is_some());
    }

    #[test]
    fn guard_passes_results_through() {
        let ok: CoreResult<u8> = guard("noop", || Ok(7));
        assert_eq!(ok.unwrap(), 7);

        let err: CoreResult<u8> =
            guard("noop", || Err(CoreError::MissingRequiredInput { field: "title" }));
        assert_eq!(err.unwrap_err().to_string(), "title is required");
    }

    #[test]
    fn guard_converts_panics() {
        let result: CoreResult<()> = guard("probe", || panic!("boom"));
        match result {
            Err(CoreError::Internal(msg)) => assert_eq!(msg, "probe: boom"),
            other => panic!("expected Internal, got {other:?}"),
        }
    }

    #[test]
    fn guard_converts_formatted_panics() {
        let result: CoreResult<()> = guard("probe", || panic!("code {}", 42));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Unexpected error: probe: code 42"
        );
    }
}
