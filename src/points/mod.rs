//! Delimited point records and their projection onto analyzer samples.
//!
//! - [`io`]: line-oriented reader with column-count validation and a JSON
//!   writer for reports.

pub mod io;

pub use io::{parse_points, read_points, write_json_file};

use crate::types::Sample;
use nalgebra::Point2;
use serde::Serialize;

/// One accepted input line.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointRecord {
    /// 1-based source line.
    pub line: usize,
    /// Exactly `PointSet::columns` values.
    pub coords: Vec<f64>,
}

/// A line rejected for carrying too few numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedLine {
    pub line: usize,
    pub found: usize,
}

/// Records read from one source, in input order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointSet {
    pub columns: usize,
    pub records: Vec<PointRecord>,
    pub skipped: Vec<SkippedLine>,
}

impl PointSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Pair up two coordinate channels as analyzer samples.
    pub fn project_xy(&self, x_column: usize, y_column: usize) -> Result<Vec<Sample>, String> {
        for column in [x_column, y_column] {
            if column >= self.columns {
                return Err(format!(
                    "Column {column} out of range for records with {} columns",
                    self.columns
                ));
            }
        }
        Ok(self
            .records
            .iter()
            .map(|r| Point2::new(r.coords[x_column], r.coords[y_column]))
            .collect())
    }
}
