use super::cluster1d::MergeStrategy;
use super::spacing::{mean_step, SpacingStats};
use crate::types::{AxisLabel, Sample};

/// Marginal coordinates of one axis before and after near-duplicate merging.
#[derive(Clone, Debug)]
pub struct AxisProfile {
    pub label: AxisLabel,
    pub raw_count: usize,
    /// Mean gap of the raw sorted coordinates, used to size `merge_eps`.
    pub step_guess: f64,
    pub merge_eps: f64,
    /// Ascending distinct lattice positions.
    pub merged: Vec<f64>,
}

impl AxisProfile {
    /// Project `samples` on `label`, sort, and merge near duplicates.
    ///
    /// The merge tolerance comes from the raw (pre-merge) mean step and is not
    /// refreshed afterwards.
    pub fn build(
        samples: &[Sample],
        label: AxisLabel,
        merge_step_fraction: f64,
        strategy: MergeStrategy,
    ) -> Self {
        let mut coords: Vec<f64> = samples.iter().map(|p| label.coord(p)).collect();
        coords.sort_by(f64::total_cmp);
        let step_guess = mean_step(&coords).unwrap_or(0.0);
        let merge_eps = step_guess.abs() * merge_step_fraction;
        let merged = strategy.merge(&coords, merge_eps);
        Self {
            label,
            raw_count: coords.len(),
            step_guess,
            merge_eps,
            merged,
        }
    }

    /// Fewer than two lattice positions, or a merge tolerance that is not a
    /// finite number (non-finite coordinates in the input).
    pub fn is_collapsed(&self) -> bool {
        self.merged.len() < 2 || !self.step_guess.is_finite() || !self.merge_eps.is_finite()
    }

    pub fn spacing(&self) -> Option<SpacingStats> {
        SpacingStats::from_sorted(&self.merged)
    }

    pub fn min(&self) -> Option<f64> {
        self.merged.first().copied()
    }

    pub fn max(&self) -> Option<f64> {
        self.merged.last().copied()
    }

    /// Position count implied by the span and a step: `round(span / step) + 1`.
    pub fn recovered_count(&self, step: f64) -> usize {
        let (Some(lo), Some(hi)) = (self.min(), self.max()) else {
            return 0;
        };
        let steps = ((hi - lo) / step).round();
        if steps.is_finite() && steps >= 0.0 {
            steps as usize + 1
        } else {
            self.merged.len()
        }
    }
}
