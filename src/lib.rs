#![doc = include_str!("../README.md")]

pub mod analyzer;
pub mod config;
pub mod diagnostics;
pub mod grid;
pub mod points;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::analyzer::{analyze, analyze_pairs, AnalyzerParams, GridAnalyzer};
pub use crate::diagnostics::{AnalysisOutcome, AnalysisReport, AnalysisTrace};
pub use crate::grid::{MergeStrategy, PresenceStrategy};
pub use crate::types::{AxisLabel, GridAnalysis, Sample};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::{AnalyzerParams, GridAnalysis, GridAnalyzer, MergeStrategy, PresenceStrategy};
    pub use nalgebra::Point2;
}
