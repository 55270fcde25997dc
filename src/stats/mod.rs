//! Word frequencies and aggregate statistics
//!
//! Both are filled during the same line-by-line pass over a document.

pub mod accumulator;
pub mod frequency;

pub use accumulator::{StatsAccumulator, StatsSnapshot};
pub use frequency::FrequencyTable;
