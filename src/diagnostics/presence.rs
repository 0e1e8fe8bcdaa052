use crate::grid::PresenceStrategy;
use serde::Serialize;

/// Outcome of the missing-intersection scan.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceStage {
    pub epsilon: f64,
    /// Strategy after resolving `Auto`.
    pub strategy: PresenceStrategy,
    pub parallel: bool,
    pub candidates: usize,
    /// Intersections without a nearby sample, column-major.
    pub missing: Vec<[f64; 2]>,
    pub elapsed_ms: f64,
}
