//! # rapid-textstats
//!
//! Descriptive statistics and word-frequency rankings for natural-language
//! text.
//!
//! Given raw text, a single line-by-line pass produces:
//!
//! - total and unique word counts
//! - average word length
//! - sentence count and average sentence length
//! - the most frequent words, optionally excluding stop-words and short tokens
//!
//! ## Quick start
//!
//! ```
//! use rapid_textstats::{analyze, AnalysisConfig};
//!
//! let cfg = AnalysisConfig::default().with_top_n(2);
//! let report = analyze("The cat sat. The dog ran!", &cfg).unwrap();
//!
//! assert_eq!(report.stats.words_count, 6);
//! assert_eq!(report.stats.sentence_count, 2);
//! assert_eq!(report.top_words.entries()[0].word, "the");
//! ```
//!
//! Ranking is deterministic: words are ordered by count, and words with the
//! same count keep the order in which they first appeared.

pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod ranking;
pub mod report;
pub mod source;
pub mod stats;
pub mod types;

pub use errors::{AnalysisError, Result};
pub use nlp::{StopwordFilter, Tokenizer};
pub use pipeline::{AnalysisReport, AnalysisSpec, ChartSeries, Pipeline, PipelineBuilder};
pub use ranking::{RankedEntry, TopNResult};
pub use source::{open_document, InMemoryText, PlainTextFile, TextSource};
pub use stats::{FrequencyTable, StatsSnapshot};
pub use types::{AnalysisConfig, StopwordSource};

/// Analyse `text` with `cfg`.
///
/// Fails only if the configuration is invalid or the stop-word list cannot
/// be read; empty text yields an all-zero report.
pub fn analyze(text: &str, cfg: &AnalysisConfig) -> Result<AnalysisReport> {
    Ok(Pipeline::from_config(cfg)?.run(text))
}

/// Extract the text of `source` and analyse it.
pub fn analyze_document(source: &impl TextSource, cfg: &AnalysisConfig) -> Result<AnalysisReport> {
    let pipeline = Pipeline::from_config(cfg)?;
    let text = source.extract()?;
    Ok(pipeline.run(&text))
}
