use super::{AxisReport, PresenceStage, TimingBreakdown};
use crate::grid::MergeStrategy;
use crate::types::{AxisLabel, GridAnalysis};
use serde::Serialize;

/// Result produced by [`GridAnalyzer::analyze_with_diagnostics`](crate::GridAnalyzer).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub analysis: GridAnalysis,
    pub trace: AnalysisTrace,
}

/// Why an analysis finished the way it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnalysisOutcome {
    /// Fewer samples than a 2x2 lattice needs.
    TooFewSamples { samples: usize },
    /// An axis merged down to fewer than two distinct positions.
    AxisCollapsed { axis: AxisLabel },
    Completed,
}

impl AnalysisOutcome {
    pub fn describe(&self) -> String {
        match self {
            AnalysisOutcome::TooFewSamples { samples } => {
                format!("too few samples ({samples}, need at least 4)")
            }
            AnalysisOutcome::AxisCollapsed { axis } => {
                format!("{axis:?} axis collapsed to a single position")
            }
            AnalysisOutcome::Completed => "completed".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub samples: usize,
    pub tolerance_fraction: f64,
    pub presence_epsilon_fraction: f64,
    pub merge_step_fraction: f64,
    pub merge_strategy: MergeStrategy,
}

/// Stage-by-stage record of one analyzer run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisTrace {
    pub input: InputDescriptor,
    pub outcome: AnalysisOutcome,
    pub timings: TimingBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence: Option<PresenceStage>,
}
