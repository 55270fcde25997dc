//! Stable error codes.
//!
//! Codes are part of the public contract: JSON consumers match on the
//! snake_case string, so variants are only ever added.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A parameter is out of its valid range.
    InvalidParameter,
    /// Two settings cannot be used together.
    InvalidCombo,
    /// The spec version is not supported.
    UnsupportedVersion,
    /// A field is not part of the schema.
    UnknownField,
    /// The stop-word list could not be read.
    ResourceUnavailable,
    /// The document could not be read.
    DocumentUnreadable,
    /// The document format has no extractor.
    UnsupportedDocument,
    /// JSON could not be parsed or produced.
    Serialization,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidParameter => "invalid_parameter",
            Self::InvalidCombo => "invalid_combo",
            Self::UnsupportedVersion => "unsupported_version",
            Self::UnknownField => "unknown_field",
            Self::ResourceUnavailable => "resource_unavailable",
            Self::DocumentUnreadable => "document_unreadable",
            Self::UnsupportedDocument => "unsupported_document",
            Self::Serialization => "serialization",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
