//! Pipeline specification, validation, and execution.
//!
//! ## Submodules
//!
//! - [`artifacts`]: the report produced by a run
//! - [`runner`]: pipeline orchestration
//! - [`observer`]: stage hooks for logging and profiling
//! - [`spec`] / [`validation`]: declarative JSON configuration

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod validation;

pub use artifacts::{AnalysisReport, ChartSeries};
pub use error_code::ErrorCode;
pub use errors::SpecError;
pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    StageTimingObserver, STAGE_ASSEMBLE, STAGE_RANK, STAGE_SCAN,
};
pub use runner::{Pipeline, PipelineBuilder};
pub use spec::{AnalysisSpec, StopwordSpec};
pub use validation::{
    Severity, ValidationDiagnostic, ValidationEngine, ValidationReport, ValidationRule,
};
