//! Declarative analysis specification.
//!
//! An [`AnalysisSpec`] is the JSON form of an [`AnalysisConfig`]. Integers are
//! signed so that negative values survive parsing and can be reported by the
//! [`ValidationEngine`](super::validation::ValidationEngine) instead of failing
//! deserialization.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "ignored_characters": ".,;:!?",
//!   "min_word_length": 3,
//!   "top_n": 20,
//!   "stopwords": { "enabled": true, "file": "stop_words.txt" },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::validation::{ValidationEngine, ValidationReport};
use crate::errors::{AnalysisError, Result};
use crate::types::{AnalysisConfig, StopwordSource};

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Top-level analysis specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Characters stripped before tokenizing. Defaults to ASCII punctuation.
    #[serde(default)]
    pub ignored_characters: Option<String>,

    #[serde(default)]
    pub min_word_length: Option<i64>,

    #[serde(default)]
    pub top_n: Option<i64>,

    #[serde(default)]
    pub stopwords: StopwordSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Stop-word settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopwordSpec {
    #[serde(default)]
    pub enabled: bool,

    /// Word list on disk.
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Built-in list language, e.g. `"en"`.
    #[serde(default)]
    pub language: Option<String>,

    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for AnalysisSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            ignored_characters: None,
            min_word_length: None,
            top_n: None,
            stopwords: StopwordSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl AnalysisSpec {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a spec from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| {
            AnalysisError::DocumentUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json(&json)
    }

    /// Run the default validation rules.
    pub fn validate(&self) -> ValidationReport {
        ValidationEngine::with_defaults().validate(self)
    }

    /// Validate and convert into an [`AnalysisConfig`].
    ///
    /// Fails with [`AnalysisError::InvalidParameter`] describing the first
    /// error-severity diagnostic. Warnings are ignored.
    pub fn into_config(self) -> Result<AnalysisConfig> {
        let report = self.validate();
        if let Some(err) = report.errors().next() {
            return Err(err.clone().into());
        }

        let defaults = AnalysisConfig::default();
        let stopword_source = match (self.stopwords.file, self.stopwords.language) {
            (_, Some(language)) => StopwordSource::BuiltIn(language),
            (Some(path), None) => StopwordSource::File(path),
            (None, None) => defaults.stopword_source,
        };

        Ok(AnalysisConfig {
            ignored_characters: self
                .ignored_characters
                .unwrap_or(defaults.ignored_characters),
            // Validation guarantees both are non-negative.
            min_word_length: self
                .min_word_length
                .map_or(defaults.min_word_length, saturating_usize),
            top_n: self.top_n.map_or(defaults.top_n, saturating_usize),
            remove_stop_words: self.stopwords.enabled,
            stopword_source,
        })
    }
}

impl From<&AnalysisConfig> for AnalysisSpec {
    fn from(cfg: &AnalysisConfig) -> Self {
        let (file, language) = match &cfg.stopword_source {
            StopwordSource::File(path) => (Some(path.clone()), None),
            StopwordSource::BuiltIn(language) => (None, Some(language.clone())),
        };
        Self {
            v: SPEC_VERSION,
            ignored_characters: Some(cfg.ignored_characters.clone()),
            min_word_length: Some(saturating_i64(cfg.min_word_length)),
            top_n: Some(saturating_i64(cfg.top_n)),
            stopwords: StopwordSpec {
                enabled: cfg.remove_stop_words,
                file,
                language,
                unknown_fields: HashMap::new(),
            },
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

/// Values past `i64::MAX` clamp instead of wrapping negative.
fn saturating_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Only called on validated, non-negative values.
fn saturating_usize(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
