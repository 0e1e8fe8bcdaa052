//! Presence queries used by the missing-intersection scan.
//!
//! A candidate intersection `(x, y)` counts as present when some sample `p`
//! satisfies `|p.x - x| < eps` and `|p.y - y| < eps`. Every index answers
//! exactly that predicate; they differ only in cost.

use crate::types::Sample;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Answers "is there a sample near this point" queries.
pub trait PresenceIndex: Sync {
    fn contains_near(&self, x: f64, y: f64, eps: f64) -> bool;
}

/// Brute-force scan over every sample.
pub struct LinearScan<'a> {
    samples: &'a [Sample],
}

impl<'a> LinearScan<'a> {
    pub fn new(samples: &'a [Sample]) -> Self {
        Self { samples }
    }
}

impl PresenceIndex for LinearScan<'_> {
    fn contains_near(&self, x: f64, y: f64, eps: f64) -> bool {
        self.samples.iter().any(|p| near(p, x, y, eps))
    }
}

/// Samples bucketed on a square cell grid keyed by integer cell index.
///
/// With the cell size equal to the query `eps`, any sample satisfying the
/// presence predicate lives in the 3x3 cell neighbourhood of the query.
pub struct BucketIndex<'a> {
    samples: &'a [Sample],
    cell: f64,
    buckets: HashMap<(i64, i64), Vec<usize>>,
}

impl<'a> BucketIndex<'a> {
    /// Build buckets of side `cell`. Non-positive or non-finite cells yield
    /// an index that never reports a sample.
    pub fn new(samples: &'a [Sample], cell: f64) -> Self {
        let mut buckets: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
        if cell.is_finite() && cell > 0.0 {
            for (idx, p) in samples.iter().enumerate() {
                if !p.x.is_finite() || !p.y.is_finite() {
                    continue;
                }
                buckets
                    .entry(cell_key(p.x, p.y, cell))
                    .or_default()
                    .push(idx);
            }
        }
        Self {
            samples,
            cell,
            buckets,
        }
    }

    pub fn cell(&self) -> f64 {
        self.cell
    }

    pub fn occupied_cells(&self) -> usize {
        self.buckets.len()
    }
}

impl PresenceIndex for BucketIndex<'_> {
    fn contains_near(&self, x: f64, y: f64, eps: f64) -> bool {
        if self.buckets.is_empty() || !(eps > 0.0) {
            return false;
        }
        // Queries wider than the cell would need a larger neighbourhood.
        let reach = (eps / self.cell).ceil().max(1.0) as i64;
        let (cx, cy) = cell_key(x, y, self.cell);
        for ix in cx.saturating_sub(reach)..=cx.saturating_add(reach) {
            for iy in cy.saturating_sub(reach)..=cy.saturating_add(reach) {
                let Some(members) = self.buckets.get(&(ix, iy)) else {
                    continue;
                };
                if members.iter().any(|&i| near(&self.samples[i], x, y, eps)) {
                    return true;
                }
            }
        }
        false
    }
}

/// Which [`PresenceIndex`] the analyzer builds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceStrategy {
    Linear,
    Bucketed,
    /// Linear below the analyzer's bucket threshold, bucketed above it.
    #[default]
    Auto,
}

impl PresenceStrategy {
    /// Resolve `Auto` against the sample count.
    pub fn resolve(self, samples: usize, bucket_threshold: usize) -> PresenceStrategy {
        match self {
            PresenceStrategy::Auto if samples > bucket_threshold => PresenceStrategy::Bucketed,
            PresenceStrategy::Auto => PresenceStrategy::Linear,
            other => other,
        }
    }
}

/// Candidate intersections with no sample nearby, in column-major order.
pub fn missing_intersections<I: PresenceIndex + ?Sized>(
    index: &I,
    xs: &[f64],
    ys: &[f64],
    eps: f64,
    parallel: bool,
) -> Vec<[f64; 2]> {
    let column = |x: f64| -> Vec<[f64; 2]> {
        ys.iter()
            .filter(|&&y| !index.contains_near(x, y, eps))
            .map(|&y| [x, y])
            .collect()
    };
    if parallel {
        xs.par_iter().flat_map_iter(|&x| column(x)).collect()
    } else {
        xs.iter().flat_map(|&x| column(x)).collect()
    }
}

/// Number of candidate intersections with no sample nearby.
pub fn count_missing<I: PresenceIndex + ?Sized>(
    index: &I,
    xs: &[f64],
    ys: &[f64],
    eps: f64,
    parallel: bool,
) -> usize {
    let column = |x: f64| -> usize {
        ys.iter()
            .filter(|&&y| !index.contains_near(x, y, eps))
            .count()
    };
    if parallel {
        xs.par_iter().map(|&x| column(x)).sum()
    } else {
        xs.iter().map(|&x| column(x)).sum()
    }
}

#[inline]
fn near(p: &Sample, x: f64, y: f64, eps: f64) -> bool {
    (p.x - x).abs() < eps && (p.y - y).abs() < eps
}

#[inline]
fn cell_key(x: f64, y: f64, cell: f64) -> (i64, i64) {
    ((x / cell).floor() as i64, (y / cell).floor() as i64)
}
