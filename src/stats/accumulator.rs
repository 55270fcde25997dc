//! Aggregate text statistics
//!
//! A [`StatsAccumulator`] is fed every tokenized line of a document together
//! with the frequency table built in the same pass. Derived averages are
//! computed once, by [`StatsAccumulator::finish`].

use serde::{Deserialize, Serialize};

use super::frequency::FrequencyTable;
use crate::nlp::tokenizer::TokenizedLine;

/// Final statistics of one analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Every token emitted by the tokenizer, filtered or not
    pub words_count: usize,
    /// Distinct tokens in the frequency table
    pub unique_words_count: usize,
    /// Mean stripped word length, `0.0` for an empty document
    pub average_word_length: f64,
    /// Sentence terminators counted before stripping
    pub sentence_count: usize,
    /// Words per sentence, `0.0` when no terminator was seen
    pub average_sentence_length: f64,
}

/// Running counters for a single pass over a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsAccumulator {
    words_count: usize,
    total_word_length: usize,
    sentence_count: usize,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the counters of one line.
    pub fn observe(&mut self, line: &TokenizedLine) {
        self.words_count += line.tokens.len();
        self.total_word_length += line.total_length;
        self.sentence_count += line.sentence_delta;
    }

    pub fn words_count(&self) -> usize {
        self.words_count
    }

    pub fn total_word_length(&self) -> usize {
        self.total_word_length
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Derive the final snapshot.
    pub fn finish(&self, table: &FrequencyTable) -> StatsSnapshot {
        StatsSnapshot {
            words_count: self.words_count,
            unique_words_count: table.len(),
            average_word_length: ratio(self.total_word_length, self.words_count),
            sentence_count: self.sentence_count,
            average_sentence_length: ratio(self.words_count, self.sentence_count),
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
