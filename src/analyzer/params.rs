//! Parameter types configuring the analyzer.
//!
//! The three tolerance fractions match the classic defaults (5% spacing
//! uniformity, 20% presence proximity, 10% merge tolerance). The remaining
//! knobs choose between equivalent or alternative implementations of the
//! merge and presence stages.

use crate::grid::{MergeStrategy, PresenceStrategy};

/// Sample count above which `PresenceStrategy::Auto` builds a bucket index.
pub const DEFAULT_BUCKET_THRESHOLD: usize = 2048;

/// Analyzer-wide parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyzerParams {
    /// Maximum `spread / mean` ratio of consecutive steps for a regular axis.
    pub tolerance_fraction: f64,
    /// Presence threshold as a fraction of `min(dx, dy)`.
    pub presence_epsilon_fraction: f64,
    /// Merge threshold as a fraction of the raw mean step.
    pub merge_step_fraction: f64,
    pub merge_strategy: MergeStrategy,
    pub presence_strategy: PresenceStrategy,
    pub bucket_threshold: usize,
    /// Run the missing-intersection scan on the rayon pool.
    pub parallel: bool,
}

impl Default for AnalyzerParams {
    fn default() -> Self {
        Self {
            tolerance_fraction: 0.05,
            presence_epsilon_fraction: 0.2,
            merge_step_fraction: 0.10,
            merge_strategy: MergeStrategy::Greedy,
            presence_strategy: PresenceStrategy::Auto,
            bucket_threshold: DEFAULT_BUCKET_THRESHOLD,
            parallel: false,
        }
    }
}

impl AnalyzerParams {
    /// Defaults with the three tolerance fractions replaced.
    pub fn with_tolerances(
        tolerance_fraction: f64,
        presence_epsilon_fraction: f64,
        merge_step_fraction: f64,
    ) -> Self {
        Self {
            tolerance_fraction,
            presence_epsilon_fraction,
            merge_step_fraction,
            ..Self::default()
        }
    }
}
