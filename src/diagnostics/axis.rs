use crate::grid::AxisProfile;
use crate::types::AxisLabel;
use serde::Serialize;

/// Merge and spacing summary for one axis.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisReport {
    pub axis: AxisLabel,
    pub raw_count: usize,
    pub step_guess: f64,
    pub merge_eps: f64,
    pub merged: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_step: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    /// `spread / mean_step`; absent for a zero or undefined step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<f64>,
    pub regular: bool,
}

impl AxisReport {
    pub fn from_profile(profile: &AxisProfile, tolerance_fraction: f64) -> Self {
        let stats = profile.spacing();
        Self {
            axis: profile.label,
            raw_count: profile.raw_count,
            step_guess: profile.step_guess,
            merge_eps: profile.merge_eps,
            merged: profile.merged.clone(),
            mean_step: stats.map(|s| s.mean),
            spread: stats.map(|s| s.spread),
            variation: stats.and_then(|s| s.variation()),
            regular: stats.is_some_and(|s| s.is_regular(tolerance_fraction)),
        }
    }
}
