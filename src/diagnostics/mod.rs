//! Diagnostics data model returned alongside the analysis result.
//!
//! `AnalysisReport` is the entry point: it bundles the compact
//! [`GridAnalysis`](crate::GridAnalysis) with an `AnalysisTrace` recording the
//! merged axes, spacing statistics, the presence scan and stage timings.

pub mod axis;
pub mod presence;
pub mod report;
pub mod timing;

pub use axis::AxisReport;
pub use presence::PresenceStage;
pub use report::{AnalysisOutcome, AnalysisReport, AnalysisTrace, InputDescriptor};
pub use timing::{StageTiming, TimingBreakdown};
