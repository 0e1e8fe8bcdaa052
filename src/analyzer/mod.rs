//! Grid regularity and completeness analysis.
//!
//! Overview
//! - Projects the samples on X and Y and sorts each marginal independently;
//!   the pairing between coordinates is only used again in the presence scan.
//! - Estimates a rough step per axis from the raw sorted values and merges
//!   coordinates closer than `merge_step_fraction` of that step.
//! - Computes the mean step and the mean absolute deviation of consecutive
//!   steps on each merged axis. An axis is regular when
//!   `spread / mean < tolerance_fraction`.
//! - Recovers extents and lattice counts from the merged axes, then checks
//!   every merged `(x, y)` intersection for a sample within
//!   `min(dx, dy) * presence_epsilon_fraction` on both axes.
//!
//! Fewer than four samples, or an axis that merges down to a single position,
//! yield [`GridAnalysis::default`]. The analyzer never errors.
//!
//! Modules
//! - [`params`] – tolerances and strategy selection.
//! - `pipeline` – the [`GridAnalyzer`] implementation.

pub mod params;
mod pipeline;

pub use params::{AnalyzerParams, DEFAULT_BUCKET_THRESHOLD};
pub use pipeline::{GridAnalyzer, MIN_SAMPLES};

use crate::types::{GridAnalysis, Sample};
use nalgebra::Point2;

/// Analyze `samples` with explicit tolerance fractions and default strategies.
///
/// Classic defaults are `0.05`, `0.2` and `0.10`.
pub fn analyze(
    samples: &[Sample],
    tolerance_fraction: f64,
    presence_epsilon_fraction: f64,
    merge_step_fraction: f64,
) -> GridAnalysis {
    GridAnalyzer::new(AnalyzerParams::with_tolerances(
        tolerance_fraction,
        presence_epsilon_fraction,
        merge_step_fraction,
    ))
    .analyze(samples)
}

/// Same as [`analyze`] for plain `(x, y)` tuples.
pub fn analyze_pairs(
    pairs: &[(f64, f64)],
    tolerance_fraction: f64,
    presence_epsilon_fraction: f64,
    merge_step_fraction: f64,
) -> GridAnalysis {
    let samples: Vec<Sample> = pairs.iter().map(|&(x, y)| Point2::new(x, y)).collect();
    analyze(
        &samples,
        tolerance_fraction,
        presence_epsilon_fraction,
        merge_step_fraction,
    )
}
