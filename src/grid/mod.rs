//! Lattice building blocks used by the analyzer.
//!
//! - [`axis`]: per-axis projection, sorting and near-duplicate merging.
//! - [`cluster1d`]: greedy and cluster-centroid 1D merge strategies.
//! - [`spacing`]: mean step and spread statistics over sorted coordinates.
//! - [`presence`]: pluggable "is a sample near this intersection" indices.

pub mod axis;
pub mod cluster1d;
pub mod presence;
pub mod spacing;

pub use axis::AxisProfile;
pub use cluster1d::{merge_centroids, merge_greedy, MergeStrategy};
pub use presence::{
    count_missing, missing_intersections, BucketIndex, LinearScan, PresenceIndex, PresenceStrategy,
};
pub use spacing::{mean_step, SpacingStats};
