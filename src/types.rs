//! Core configuration types shared across the crate.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{AnalysisError, Result};

/// ASCII punctuation stripped from lines before tokenizing.
///
/// Includes the sentence terminators `.`, `!` and `?`; sentence counting
/// happens before stripping, so they are still counted.
pub const DEFAULT_IGNORED_CHARACTERS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Tokens shorter than this are left out of the frequency table.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Number of ranked words reported by default.
pub const DEFAULT_TOP_N: usize = 20;

/// Stop-word list read when no path is configured.
pub const DEFAULT_STOPWORD_FILE: &str = "stop_words.txt";

/// Where stop-words come from when filtering is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordSource {
    /// Whitespace-delimited word list on disk.
    File(PathBuf),
    /// Built-in list for a language code such as `"en"`.
    BuiltIn(String),
}

impl Default for StopwordSource {
    fn default() -> Self {
        StopwordSource::File(PathBuf::from(DEFAULT_STOPWORD_FILE))
    }
}

/// Parameters of a single analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Characters removed from every line before splitting into words.
    pub ignored_characters: String,
    /// Minimum token length (in characters) to enter the frequency table.
    pub min_word_length: usize,
    /// Maximum number of ranked words in the report.
    pub top_n: usize,
    /// Exclude stop-words from the frequency table.
    pub remove_stop_words: bool,
    /// Stop-word list used when `remove_stop_words` is set.
    pub stopword_source: StopwordSource,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ignored_characters: DEFAULT_IGNORED_CHARACTERS.to_string(),
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            top_n: DEFAULT_TOP_N,
            remove_stop_words: false,
            stopword_source: StopwordSource::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn with_ignored_characters(mut self, chars: impl Into<String>) -> Self {
        self.ignored_characters = chars.into();
        self
    }

    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Enable stop-word removal using the given source.
    pub fn with_stopwords(mut self, source: StopwordSource) -> Self {
        self.remove_stop_words = true;
        self.stopword_source = source;
        self
    }

    pub fn without_stopwords(mut self) -> Self {
        self.remove_stop_words = false;
        self
    }

    /// Reject parameter values that have no meaningful interpretation.
    pub fn validate(&self) -> Result<()> {
        if self.min_word_length == 0 {
            return Err(AnalysisError::invalid_parameter(
                "min_word_length",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
