use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall-clock duration of one analyzer stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Per-stage timings of a single analysis run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Record a stage that started at `start`, returning its duration.
    pub fn record(&mut self, label: impl Into<String>, start: Instant) -> f64 {
        let ms = elapsed_ms(start);
        self.stages.push(StageTiming::new(label, ms));
        ms
    }

    pub fn finish(&mut self, start: Instant) {
        self.total_ms = elapsed_ms(start);
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
