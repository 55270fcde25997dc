//! Crate-wide error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::error_code::ErrorCode;

/// Errors that abort an analysis run.
///
/// Empty input is not an error: it produces an all-zero report.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The stop-word list could not be read.
    #[error("stop-word list {} is unavailable: {source}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration value was rejected.
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter { parameter: String, reason: String },

    /// The document text could not be read.
    #[error("cannot read document {}: {source}", .path.display())]
    DocumentUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document format needs an extractor this crate does not provide.
    #[error("unsupported document format: {}", .path.display())]
    UnsupportedDocument { path: PathBuf },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn invalid_parameter(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidParameter {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::ResourceUnavailable { .. } => ErrorCode::ResourceUnavailable,
            AnalysisError::InvalidParameter { .. } => ErrorCode::InvalidParameter,
            AnalysisError::DocumentUnreadable { .. } => ErrorCode::DocumentUnreadable,
            AnalysisError::UnsupportedDocument { .. } => ErrorCode::UnsupportedDocument,
            AnalysisError::Serialization(_) => ErrorCode::Serialization,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
