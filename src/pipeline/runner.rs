//! Pipeline runner: orchestrates the analysis of a document.
//!
//! A [`Pipeline`] holds everything fixed for a run: the tokenizer, the
//! loaded stop-word set, the minimum word length and the ranking size.
//! Calling [`Pipeline::run`] makes a single line-by-line pass that feeds
//! the frequency table and the statistics accumulator together, then ranks
//! and assembles the report.
//!
//! Per-run state (frequency table, counters) lives on the stack of `run`, so
//! one pipeline can analyse many documents, concurrently if needed (see
//! [`Pipeline::run_batch`]).

use rayon::prelude::*;

use crate::errors::{AnalysisError, Result};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{Token, Tokenizer};
use crate::pipeline::artifacts::AnalysisReport;
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReportBuilder, STAGE_ASSEMBLE, STAGE_RANK,
    STAGE_SCAN,
};
use crate::ranking::top_n;
use crate::stats::{FrequencyTable, StatsAccumulator};
use crate::types::{
    AnalysisConfig, DEFAULT_IGNORED_CHARACTERS, DEFAULT_MIN_WORD_LENGTH, DEFAULT_TOP_N,
};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline
// ============================================================================

/// A configured text-statistics pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
    min_word_length: usize,
    top_n: usize,
}

impl Pipeline {
    /// Build a pipeline from a configuration.
    ///
    /// The stop-word list, if enabled, is read here, before any text is
    /// processed. A missing list aborts with
    /// [`AnalysisError::ResourceUnavailable`].
    pub fn from_config(cfg: &AnalysisConfig) -> Result<Self> {
        cfg.validate()?;
        let stopwords = StopwordFilter::from_config(cfg)?;
        Ok(Self {
            tokenizer: Tokenizer::new(&cfg.ignored_characters),
            stopwords,
            min_word_length: cfg.min_word_length,
            top_n: cfg.top_n,
        })
    }

    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Whether a token enters the frequency table.
    pub fn qualifies(&self, token: &Token) -> bool {
        token.len() >= self.min_word_length && !self.stopwords.is_stopword(&token.text)
    }

    /// Analyse one document.
    pub fn run(&self, text: &str) -> AnalysisReport {
        self.run_with_observer(text, &mut NoopObserver)
    }

    /// Analyse one document, reporting stage boundaries to `observer`.
    ///
    /// Stages run in order:
    /// 1. Scan: tokenize each line, count qualifying tokens, accumulate stats
    /// 2. Rank the frequency table
    /// 3. Assemble the report
    pub fn run_with_observer(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> AnalysisReport {
        // Stage 1: Scan
        trace_stage!(STAGE_SCAN);
        observer.on_stage_start(STAGE_SCAN);
        let clock = StageClock::start();
        let mut table = FrequencyTable::new();
        let mut acc = StatsAccumulator::new();
        let mut lines = 0;
        for raw in Tokenizer::lines(text) {
            let line = self.tokenizer.tokenize_line(raw);
            if line.is_empty() {
                continue;
            }
            lines += 1;
            acc.observe(&line);
            for token in line.tokens.iter().filter(|t| self.qualifies(t)) {
                table.record(&token.text);
            }
            observer.on_line(&line);
        }
        let report = StageReportBuilder::new(clock.elapsed())
            .lines(lines)
            .tokens(acc.words_count())
            .entries(table.len())
            .build();
        observer.on_stage_end(STAGE_SCAN, &report);

        // Stage 2: Rank
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let top_words = top_n(&table, self.top_n);
        let report = StageReportBuilder::new(clock.elapsed())
            .entries(top_words.len())
            .build();
        observer.on_stage_end(STAGE_RANK, &report);

        // Stage 3: Assemble
        trace_stage!(STAGE_ASSEMBLE);
        observer.on_stage_start(STAGE_ASSEMBLE);
        let clock = StageClock::start();
        let result = AnalysisReport::assemble(acc.finish(&table), top_words, self.top_n);
        let report = StageReportBuilder::new(clock.elapsed()).build();
        observer.on_stage_end(STAGE_ASSEMBLE, &report);

        result
    }

    /// Analyse independent documents in parallel.
    ///
    /// Reports are returned in input order.
    pub fn run_batch<S>(&self, texts: &[S]) -> Vec<AnalysisReport>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "tracing")]
        tracing::info!(documents = texts.len(), "batch analysis");

        texts.par_iter().map(|t| self.run(t.as_ref())).collect()
    }
}

// ============================================================================
// PipelineBuilder
// ============================================================================

/// Fluent builder for a [`Pipeline`].
///
/// ```
/// # use rapid_textstats::pipeline::runner::PipelineBuilder;
/// # use rapid_textstats::nlp::StopwordFilter;
/// let pipeline = PipelineBuilder::new()
///     .min_word_length(4)
///     .top_n(10)
///     .stopwords(StopwordFilter::from_list(&["that", "with"]))
///     .build()
///     .unwrap();
/// assert_eq!(pipeline.top_n(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    ignored_characters: String,
    stopwords: StopwordFilter,
    min_word_length: usize,
    top_n: usize,
}

impl PipelineBuilder {
    /// Start from the default configuration with no stop-words.
    pub fn new() -> Self {
        PipelineBuilder {
            ignored_characters: DEFAULT_IGNORED_CHARACTERS.to_string(),
            stopwords: StopwordFilter::empty(),
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn ignored_characters(mut self, chars: impl Into<String>) -> Self {
        self.ignored_characters = chars.into();
        self
    }

    pub fn min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Use an already loaded stop-word set.
    pub fn stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn build(self) -> Result<Pipeline> {
        if self.min_word_length == 0 {
            return Err(AnalysisError::invalid_parameter(
                "min_word_length",
                "must be at least 1",
            ));
        }
        Ok(Pipeline {
            tokenizer: Tokenizer::new(&self.ignored_characters),
            stopwords: self.stopwords,
            min_word_length: self.min_word_length,
            top_n: self.top_n,
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
