use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// One projected measurement position.
pub type Sample = Point2<f64>;

/// Axis of the sample plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisLabel {
    X,
    Y,
}

impl AxisLabel {
    pub fn coord(self, sample: &Sample) -> f64 {
        match self {
            AxisLabel::X => sample.x,
            AxisLabel::Y => sample.y,
        }
    }
}

/// Lattice description recovered from a sample set.
///
/// The default value doubles as the "inconclusive" result: every count is
/// zero and neither axis is flagged regular.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridAnalysis {
    pub regular_x: bool,
    pub regular_y: bool,
    pub dx: f64,
    pub dy: f64,
    pub nx: usize,
    pub ny: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub missing_points: usize,
}

impl GridAnalysis {
    /// Both axes passed the spacing uniformity check.
    pub fn is_regular(&self) -> bool {
        self.regular_x && self.regular_y
    }

    /// False when the input was too sparse or an axis collapsed.
    pub fn is_conclusive(&self) -> bool {
        self.nx >= 2 && self.ny >= 2
    }

    /// Number of lattice intersections implied by `nx * ny`.
    pub fn expected_points(&self) -> usize {
        self.nx.saturating_mul(self.ny)
    }

    /// Fraction of expected intersections that have a nearby sample.
    pub fn completeness(&self) -> f64 {
        let expected = self.expected_points();
        if expected == 0 {
            return 0.0;
        }
        let present = expected.saturating_sub(self.missing_points);
        present as f64 / expected as f64
    }

    /// Lattice bin `(i, j)` for `point`, rounding to the nearest intersection.
    ///
    /// Returns `None` for inconclusive analyses and for points that round
    /// outside `[0, nx) x [0, ny)`.
    pub fn lattice_index(&self, point: &Sample) -> Option<(usize, usize)> {
        if !self.is_conclusive() || !(self.dx > 0.0) || !(self.dy > 0.0) {
            return None;
        }
        let i = bin_along(point.x, self.x_min, self.dx, self.nx)?;
        let j = bin_along(point.y, self.y_min, self.dy, self.ny)?;
        Some((i, j))
    }
}

fn bin_along(value: f64, origin: f64, step: f64, count: usize) -> Option<usize> {
    let idx = ((value - origin) / step).round();
    if !idx.is_finite() || idx < 0.0 || idx >= count as f64 {
        return None;
    }
    Some(idx as usize)
}
