//! Analyzer pipeline: projection, merge, spacing statistics, presence scan.
//!
//! Typical usage:
//! ```
//! use grid_analyzer::{AnalyzerParams, GridAnalyzer};
//! use nalgebra::Point2;
//!
//! let samples: Vec<Point2<f64>> = (0..3)
//!     .flat_map(|i| (0..3).map(move |j| Point2::new(i as f64, 2.0 * j as f64)))
//!     .collect();
//! let analyzer = GridAnalyzer::new(AnalyzerParams::default());
//! let report = analyzer.analyze_with_diagnostics(&samples);
//! assert_eq!(report.analysis.missing_points, 0);
//! assert!(report.trace.presence.is_some());
//! assert_eq!(analyzer.analyze(&samples), report.analysis);
//! ```
use super::params::AnalyzerParams;
use crate::diagnostics::{
    AnalysisOutcome, AnalysisReport, AnalysisTrace, AxisReport, InputDescriptor, PresenceStage,
    TimingBreakdown,
};
use crate::grid::{
    count_missing, missing_intersections, AxisProfile, BucketIndex, LinearScan, PresenceIndex,
    PresenceStrategy, SpacingStats,
};
use crate::types::{AxisLabel, GridAnalysis, Sample};
use log::debug;
use std::time::Instant;

/// Smallest sample count that can describe a 2x2 lattice.
pub const MIN_SAMPLES: usize = 4;

/// Grid regularity and completeness analyzer.
///
/// Holds only its parameters; every call is independent and the input is
/// never retained.
#[derive(Clone, Debug, Default)]
pub struct GridAnalyzer {
    params: AnalyzerParams,
}

impl GridAnalyzer {
    /// Create an analyzer with the supplied parameters.
    pub fn new(params: AnalyzerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    /// Analyze `samples`, returning the compact result.
    ///
    /// Only counts missing intersections; use
    /// [`analyze_with_diagnostics`](Self::analyze_with_diagnostics) for the
    /// merged axes, the missing coordinates and timings.
    pub fn analyze(&self, samples: &[Sample]) -> GridAnalysis {
        if samples.len() < MIN_SAMPLES {
            debug!("GridAnalyzer::analyze too few samples -> default result");
            return GridAnalysis::default();
        }
        let (x_profile, y_profile) = self.profiles(samples);
        let Ok((x_fit, y_fit)) = fit_axes(&x_profile, &y_profile) else {
            return GridAnalysis::default();
        };

        let epsilon = self.presence_epsilon(&x_fit, &y_fit);
        let (_, missing) = self.with_presence_index(samples, epsilon, |index| {
            count_missing(
                index,
                &x_profile.merged,
                &y_profile.merged,
                epsilon,
                self.params.parallel,
            )
        });
        self.assemble(&x_profile, &y_profile, &x_fit, &y_fit, missing)
    }

    /// Analyze `samples` and return the result with a stage-by-stage trace.
    pub fn analyze_with_diagnostics(&self, samples: &[Sample]) -> AnalysisReport {
        let params = &self.params;
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();
        let input = InputDescriptor {
            samples: samples.len(),
            tolerance_fraction: params.tolerance_fraction,
            presence_epsilon_fraction: params.presence_epsilon_fraction,
            merge_step_fraction: params.merge_step_fraction,
            merge_strategy: params.merge_strategy,
        };

        if samples.len() < MIN_SAMPLES {
            debug!("GridAnalyzer::analyze too few samples -> default result");
            timings.finish(total_start);
            return AnalysisReport {
                analysis: GridAnalysis::default(),
                trace: AnalysisTrace {
                    input,
                    outcome: AnalysisOutcome::TooFewSamples {
                        samples: samples.len(),
                    },
                    timings,
                    x_axis: None,
                    y_axis: None,
                    presence: None,
                },
            };
        }

        let merge_start = Instant::now();
        let (x_profile, y_profile) = self.profiles(samples);
        timings.record("merge", merge_start);

        let x_axis = AxisReport::from_profile(&x_profile, params.tolerance_fraction);
        let y_axis = AxisReport::from_profile(&y_profile, params.tolerance_fraction);

        let (x_fit, y_fit) = match fit_axes(&x_profile, &y_profile) {
            Ok(fits) => fits,
            Err(axis) => {
                timings.finish(total_start);
                return AnalysisReport {
                    analysis: GridAnalysis::default(),
                    trace: AnalysisTrace {
                        input,
                        outcome: AnalysisOutcome::AxisCollapsed { axis },
                        timings,
                        x_axis: Some(x_axis),
                        y_axis: Some(y_axis),
                        presence: None,
                    },
                };
            }
        };

        let presence_start = Instant::now();
        let epsilon = self.presence_epsilon(&x_fit, &y_fit);
        let (strategy, missing) = self.with_presence_index(samples, epsilon, |index| {
            missing_intersections(
                index,
                &x_profile.merged,
                &y_profile.merged,
                epsilon,
                params.parallel,
            )
        });
        let presence_ms = timings.record("presence", presence_start);

        let analysis = self.assemble(&x_profile, &y_profile, &x_fit, &y_fit, missing.len());
        let presence = PresenceStage {
            epsilon,
            strategy,
            parallel: params.parallel,
            candidates: x_profile.merged.len() * y_profile.merged.len(),
            missing,
            elapsed_ms: presence_ms,
        };
        timings.finish(total_start);

        AnalysisReport {
            analysis,
            trace: AnalysisTrace {
                input,
                outcome: AnalysisOutcome::Completed,
                timings,
                x_axis: Some(x_axis),
                y_axis: Some(y_axis),
                presence: Some(presence),
            },
        }
    }

    fn profiles(&self, samples: &[Sample]) -> (AxisProfile, AxisProfile) {
        let params = &self.params;
        debug!(
            "GridAnalyzer::analyze start samples={} tol={} presence={} merge={} strategy={:?}",
            samples.len(),
            params.tolerance_fraction,
            params.presence_epsilon_fraction,
            params.merge_step_fraction,
            params.merge_strategy
        );
        let x_profile = AxisProfile::build(
            samples,
            AxisLabel::X,
            params.merge_step_fraction,
            params.merge_strategy,
        );
        let y_profile = AxisProfile::build(
            samples,
            AxisLabel::Y,
            params.merge_step_fraction,
            params.merge_strategy,
        );
        debug!(
            "GridAnalyzer::analyze merged x: {} -> {} (eps={:.4}) y: {} -> {} (eps={:.4})",
            x_profile.raw_count,
            x_profile.merged.len(),
            x_profile.merge_eps,
            y_profile.raw_count,
            y_profile.merged.len(),
            y_profile.merge_eps
        );
        (x_profile, y_profile)
    }

    fn presence_epsilon(&self, x_fit: &AxisFit, y_fit: &AxisFit) -> f64 {
        x_fit.stats.mean.min(y_fit.stats.mean) * self.params.presence_epsilon_fraction
    }

    /// Build the configured presence index and hand it to `scan`.
    fn with_presence_index<R>(
        &self,
        samples: &[Sample],
        epsilon: f64,
        scan: impl FnOnce(&dyn PresenceIndex) -> R,
    ) -> (PresenceStrategy, R) {
        let strategy = self
            .params
            .presence_strategy
            .resolve(samples.len(), self.params.bucket_threshold);
        let out = match strategy {
            PresenceStrategy::Bucketed => scan(&BucketIndex::new(samples, epsilon)),
            _ => scan(&LinearScan::new(samples)),
        };
        (strategy, out)
    }

    fn assemble(
        &self,
        x_profile: &AxisProfile,
        y_profile: &AxisProfile,
        x_fit: &AxisFit,
        y_fit: &AxisFit,
        missing_points: usize,
    ) -> GridAnalysis {
        let tolerance = self.params.tolerance_fraction;
        let (dx, dy) = (x_fit.stats.mean, y_fit.stats.mean);
        let analysis = GridAnalysis {
            regular_x: x_fit.stats.is_regular(tolerance),
            regular_y: y_fit.stats.is_regular(tolerance),
            dx,
            dy,
            nx: x_profile.recovered_count(dx),
            ny: y_profile.recovered_count(dy),
            x_min: x_fit.min,
            x_max: x_fit.max,
            y_min: y_fit.min,
            y_max: y_fit.max,
            missing_points,
        };
        debug!(
            "GridAnalyzer::analyze done nx={} ny={} dx={:.4} dy={:.4} regular=({}, {}) missing={}",
            analysis.nx,
            analysis.ny,
            analysis.dx,
            analysis.dy,
            analysis.regular_x,
            analysis.regular_y,
            analysis.missing_points
        );
        analysis
    }
}

/// Spacing statistics and extents of a non-collapsed axis.
struct AxisFit {
    stats: SpacingStats,
    min: f64,
    max: f64,
}

impl AxisFit {
    fn new(profile: &AxisProfile) -> Option<Self> {
        if profile.is_collapsed() {
            return None;
        }
        Some(Self {
            stats: profile.spacing()?,
            min: profile.min()?,
            max: profile.max()?,
        })
    }
}

/// Fit both axes, or name the first one that collapsed.
fn fit_axes(x: &AxisProfile, y: &AxisProfile) -> Result<(AxisFit, AxisFit), AxisLabel> {
    let x_fit = AxisFit::new(x).ok_or(AxisLabel::X)?;
    let y_fit = AxisFit::new(y).ok_or(AxisLabel::Y)?;
    Ok((x_fit, y_fit))
}
