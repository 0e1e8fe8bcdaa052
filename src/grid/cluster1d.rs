//! One-dimensional merging of nearly identical coordinates.
//!
//! Both strategies expect an ascending input and return an ascending output.

use serde::{Deserialize, Serialize};

/// How near-duplicate axis coordinates collapse into a single lattice line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// Keep a value when it differs from the last kept value by more than
    /// `eps`. The kept value is the first member of each run.
    ///
    /// Single pass and order sensitive: a slowly creeping sequence of values
    /// stays chained to the first kept value until the drift exceeds `eps`.
    #[default]
    Greedy,
    /// Split into runs wherever a consecutive gap exceeds `eps` and replace
    /// every run with its mean.
    ClusterCentroid,
}

impl MergeStrategy {
    pub fn merge(self, sorted: &[f64], eps: f64) -> Vec<f64> {
        match self {
            MergeStrategy::Greedy => merge_greedy(sorted, eps),
            MergeStrategy::ClusterCentroid => merge_centroids(sorted, eps),
        }
    }
}

/// Greedy merge against the last kept value.
pub fn merge_greedy(sorted: &[f64], eps: f64) -> Vec<f64> {
    let mut merged: Vec<f64> = Vec::new();
    for &value in sorted {
        match merged.last() {
            Some(&last) if !((value - last).abs() > eps) => {}
            _ => merged.push(value),
        }
    }
    merged
}

/// Cluster consecutive values whose gap is at most `eps`, emit run means.
pub fn merge_centroids(sorted: &[f64], eps: f64) -> Vec<f64> {
    split_runs(sorted, eps)
        .into_iter()
        .map(|run| run.iter().sum::<f64>() / run.len() as f64)
        .collect()
}

fn split_runs(sorted: &[f64], eps: f64) -> Vec<&[f64]> {
    let mut runs: Vec<&[f64]> = Vec::new();
    let mut start = 0usize;
    for i in 1..sorted.len() {
        if (sorted[i] - sorted[i - 1]).abs() > eps {
            runs.push(&sorted[start..i]);
            start = i;
        }
    }
    if start < sorted.len() {
        runs.push(&sorted[start..]);
    }
    runs
}
