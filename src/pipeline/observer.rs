//! Pipeline observer hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Pass [`NoopObserver`] when nothing needs to be recorded.

use std::time::{Duration, Instant};

use crate::nlp::tokenizer::TokenizedLine;

pub const STAGE_SCAN: &str = "scan";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_ASSEMBLE: &str = "assemble";

/// Measures the wall time of one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// What happened during one stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageReport {
    pub elapsed: Duration,
    /// Non-blank lines processed
    pub lines: Option<usize>,
    /// Tokens emitted by the tokenizer
    pub tokens: Option<usize>,
    /// Entries produced (table size or ranked entries)
    pub entries: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }
}

/// Fluent construction of a [`StageReport`].
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn lines(mut self, lines: usize) -> Self {
        self.report.lines = Some(lines);
        self
    }

    pub fn tokens(mut self, tokens: usize) -> Self {
        self.report.tokens = Some(tokens);
        self
    }

    pub fn entries(mut self, entries: usize) -> Self {
        self.report.entries = Some(entries);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Callbacks invoked while a document is analysed.
///
/// All methods have empty default implementations.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called for every non-blank line after tokenization.
    fn on_line(&mut self, _line: &TokenizedLine) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records the report of each finished stage.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    stages: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finished stages in execution order.
    pub fn stages(&self) -> &[(&'static str, StageReport)] {
        &self.stages
    }

    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.stages
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    pub fn total(&self) -> Duration {
        self.stages.iter().map(|(_, r)| r.elapsed).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.stages.push((stage, report.clone()));
    }
}
