//! Stopword filtering
//!
//! The stop-word set is loaded once, before any text is processed, from a
//! whitespace-delimited word list on disk or from the built-in lists of the
//! `stop-words` crate. Membership is case-sensitive; tokens reach the filter
//! lower-cased, so lists are expected to be lower-case too.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::errors::{AnalysisError, Result};
use crate::types::{AnalysisConfig, StopwordSource};

/// A filter for removing stopwords from the frequency table
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Set of stopwords, stored exactly as read
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the filter a configuration asks for.
    ///
    /// Returns an empty filter when stop-word removal is disabled.
    pub fn from_config(cfg: &AnalysisConfig) -> Result<Self> {
        if !cfg.remove_stop_words {
            return Ok(Self::empty());
        }
        match &cfg.stopword_source {
            StopwordSource::File(path) => Self::load(path),
            StopwordSource::BuiltIn(language) => Self::builtin(language),
        }
    }

    /// Read a whitespace-delimited word list.
    ///
    /// The file is read fully and closed before returning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).map_err(|source| AnalysisError::ResourceUnavailable {
                path: path.to_path_buf(),
                source,
            })?;
        let filter = Self::parse(&contents);

        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), words = filter.len(), "loaded stop-word list");

        Ok(filter)
    }

    /// Build a filter from whitespace-delimited text.
    pub fn parse(contents: &str) -> Self {
        Self {
            stopwords: contents.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Built-in stopwords for a language code or name.
    ///
    /// Supported: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu, tr, pl, ar
    pub fn builtin(language: &str) -> Result<Self> {
        let lang = Self::parse_language(language).ok_or_else(|| {
            AnalysisError::invalid_parameter(
                "stopword_language",
                format!("no built-in stop-word list for \"{language}\""),
            )
        })?;
        Ok(Self {
            stopwords: get(lang).iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_string());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    pub(crate) fn parse_language(language: &str) -> Option<LANGUAGE> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return None,
        };
        Some(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::builtin("en").unwrap();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("The")); // case sensitive
        assert!(!filter.is_stopword("machine"));
    }

    #[test]
    fn test_unknown_language() {
        let err = StopwordFilter::builtin("klingon").unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidParameter { .. }));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));
        assert_eq!(filter.len(), 3);
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_parse_whitespace_delimited() {
        let filter = StopwordFilter::parse("the a\nan\t\tof\r\n  The\n");

        assert_eq!(filter.len(), 5);
        assert!(filter.is_stopword("of"));
        assert!(filter.is_stopword("The"));
        assert!(!filter.is_stopword(""));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "the and\nof").unwrap();

        let filter = StopwordFilter::load(file.path()).unwrap();
        assert_eq!(filter.len(), 3);
        assert!(filter.is_stopword("and"));
    }

    #[test]
    fn test_missing_file_is_resource_unavailable() {
        let path = PathBuf::from("/definitely/not/here/stop_words.txt");
        let err = StopwordFilter::load(&path).unwrap_err();

        match err {
            AnalysisError::ResourceUnavailable { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_config_disabled_is_empty() {
        let cfg = AnalysisConfig::default();
        let filter = StopwordFilter::from_config(&cfg).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_from_config_builtin() {
        let cfg = AnalysisConfig::default().with_stopwords(StopwordSource::BuiltIn("de".into()));
        let filter = StopwordFilter::from_config(&cfg).unwrap();
        assert!(filter.is_stopword("und"));
    }
}
