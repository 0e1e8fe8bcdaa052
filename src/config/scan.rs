use crate::analyzer::{AnalyzerParams, DEFAULT_BUCKET_THRESHOLD};
use crate::grid::{MergeStrategy, PresenceStrategy};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `grid_scan` tool.
#[derive(Debug, Deserialize)]
pub struct ScanConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Numbers required per input line.
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default = "default_x_column")]
    pub x_column: usize,
    #[serde(default = "default_y_column")]
    pub y_column: usize,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub output: ScanOutputConfig,
}

// Layout of the surface scans this tool was written for: index, X, Y, Z.
fn default_columns() -> usize {
    4
}

fn default_x_column() -> usize {
    1
}

fn default_y_column() -> usize {
    2
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Allowed `spread / mean` of consecutive steps.
    pub tolerance_fraction: f64,
    /// Presence threshold as a fraction of the smaller step.
    pub presence_epsilon_fraction: f64,
    /// Merge threshold as a fraction of the raw mean step.
    pub merge_step_fraction: f64,
    pub merge_strategy: MergeStrategy,
    pub presence_strategy: PresenceStrategy,
    /// When `None`, the analyzer default applies.
    pub bucket_threshold: Option<usize>,
    pub parallel: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        let params = AnalyzerParams::default();
        Self {
            tolerance_fraction: params.tolerance_fraction,
            presence_epsilon_fraction: params.presence_epsilon_fraction,
            merge_step_fraction: params.merge_step_fraction,
            merge_strategy: params.merge_strategy,
            presence_strategy: params.presence_strategy,
            bucket_threshold: None,
            parallel: params.parallel,
        }
    }
}

impl AnalyzerConfig {
    pub fn to_params(&self) -> AnalyzerParams {
        AnalyzerParams {
            tolerance_fraction: self.tolerance_fraction,
            presence_epsilon_fraction: self.presence_epsilon_fraction,
            merge_step_fraction: self.merge_step_fraction,
            merge_strategy: self.merge_strategy,
            presence_strategy: self.presence_strategy,
            bucket_threshold: self.bucket_threshold.unwrap_or(DEFAULT_BUCKET_THRESHOLD),
            parallel: self.parallel,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScanOutputConfig {
    pub format: OutputFormat,
    /// Compact `GridAnalysis` JSON.
    pub json_out: Option<PathBuf>,
    /// Full report including the diagnostic trace.
    pub report_out: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ScanConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<ScanConfig, String> {
    serde_json::from_str(data).map_err(|e| e.to_string())
}
