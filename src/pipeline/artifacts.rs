//! Pipeline output artifacts.
//!
//! [`AnalysisReport`] is the public contract of a run: scalar statistics plus
//! the ranked words. It carries no presentation; see [`crate::report`] for
//! console, HTML and chart rendering.

use serde::{Deserialize, Serialize};

use crate::ranking::{RankedEntry, TopNResult};
use crate::stats::StatsSnapshot;

/// Result of analysing one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub stats: StatsSnapshot,
    /// Number of ranked words requested
    pub top_n: usize,
    pub top_words: TopNResult,
}

impl AnalysisReport {
    /// Package statistics and ranking into a report.
    pub fn assemble(stats: StatsSnapshot, top_words: TopNResult, top_n: usize) -> Self {
        Self {
            stats,
            top_n,
            top_words,
        }
    }

    pub fn top_entries(&self) -> &[RankedEntry] {
        self.top_words.entries()
    }

    /// Labels and values of the ranking, in rank order.
    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries::from(&self.top_words)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Order-preserving labels and numeric values ready for a chart renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Largest value, `0.0` for an empty series.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

impl From<&TopNResult> for ChartSeries {
    fn from(top: &TopNResult) -> Self {
        Self {
            labels: top.iter().map(|e| e.word.clone()).collect(),
            values: top.iter().map(|e| e.count as f64).collect(),
        }
    }
}
