//! Structured errors reported while validating an [`AnalysisSpec`](super::spec::AnalysisSpec).

use serde::Serialize;
use thiserror::Error;

use super::error_code::ErrorCode;
use crate::errors::AnalysisError;

/// A single problem found in a spec, located by JSON pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{code}: {message} (at {path})")]
pub struct SpecError {
    pub code: ErrorCode,
    /// JSON pointer to the offending field, e.g. `/top_n`
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Field name derived from the pointer, e.g. `stopwords.language`.
    pub fn parameter(&self) -> String {
        self.path.trim_start_matches('/').replace('/', ".")
    }
}

impl From<SpecError> for AnalysisError {
    fn from(err: SpecError) -> Self {
        AnalysisError::InvalidParameter {
            parameter: err.parameter(),
            reason: err.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SpecError::new(ErrorCode::InvalidParameter, "/top_n", "top_n must not be negative");
        assert_eq!(err.to_string(), "invalid_parameter: top_n must not be negative (at /top_n)");
    }

    #[test]
    fn test_into_analysis_error() {
        let err = SpecError::new(
            ErrorCode::InvalidParameter,
            "/stopwords/language",
            "no built-in list",
        )
        .with_hint("use \"en\"");
        let err: AnalysisError = err.into();

        match err {
            AnalysisError::InvalidParameter { parameter, reason } => {
                assert_eq!(parameter, "stopwords.language");
                assert_eq!(reason, "no built-in list");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_hint_omitted_when_absent() {
        let err = SpecError::new(ErrorCode::UnknownField, "/x", "unrecognized field \"x\"");
        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("hint").is_none());
        assert_eq!(json["code"], "unknown_field");
    }
}
