//! Step statistics over sorted axis coordinates.

use serde::Serialize;

/// Mean consecutive gap of an ascending sequence.
///
/// `None` when fewer than two values are available.
pub fn mean_step(sorted: &[f64]) -> Option<f64> {
    if sorted.len() < 2 {
        return None;
    }
    let total: f64 = sorted.windows(2).map(|pair| pair[1] - pair[0]).sum();
    Some(total / (sorted.len() - 1) as f64)
}

/// Mean step and mean absolute deviation of consecutive steps.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingStats {
    pub mean: f64,
    pub spread: f64,
}

impl SpacingStats {
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let mean = mean_step(sorted)?;
        let deviation: f64 = sorted
            .windows(2)
            .map(|pair| (pair[1] - pair[0] - mean).abs())
            .sum();
        Some(Self {
            mean,
            spread: deviation / (sorted.len() - 1) as f64,
        })
    }

    /// Coefficient of variation `spread / mean`.
    ///
    /// `None` for a zero or non-finite mean step.
    pub fn variation(&self) -> Option<f64> {
        if !self.mean.is_finite() || self.mean <= 0.0 {
            return None;
        }
        let ratio = self.spread / self.mean;
        ratio.is_finite().then_some(ratio)
    }

    /// Spacing is uniform when the variation stays strictly below `tolerance`.
    pub fn is_regular(&self, tolerance: f64) -> bool {
        self.variation().is_some_and(|cv| cv < tolerance)
    }
}
