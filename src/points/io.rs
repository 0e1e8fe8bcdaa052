//! I/O helpers for point files and JSON reports.
//!
//! - `parse_points`: read delimited records from any `BufRead`.
//! - `read_points`: same, from a file on disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Commas and whitespace both separate values. Numbers are taken left to
//! right until the first token that is not a finite number (`nan` and `inf`
//! end the prefix too); a line contributing fewer than `columns` numbers is
//! skipped and reported, extra numbers are ignored.
use super::{PointRecord, PointSet, SkippedLine};
use log::{debug, warn};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse records with `columns` leading numbers from `reader`.
pub fn parse_points<R: BufRead>(reader: R, columns: usize) -> Result<PointSet, String> {
    let mut set = PointSet {
        columns,
        ..PointSet::default()
    };
    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| format!("Failed to read line {line_no}: {e}"))?;
        let numbers = leading_numbers(&line);
        if numbers.len() < columns {
            warn!(
                "line {} has only {} numbers, expected {}; skipping",
                line_no,
                numbers.len(),
                columns
            );
            set.skipped.push(SkippedLine {
                line: line_no,
                found: numbers.len(),
            });
            continue;
        }
        set.records.push(PointRecord {
            line: line_no,
            coords: numbers[..columns].to_vec(),
        });
    }
    debug!(
        "parse_points: accepted={} skipped={} columns={}",
        set.records.len(),
        set.skipped.len(),
        columns
    );
    Ok(set)
}

/// Read a point file from disk. A file without a single usable record is an
/// error.
pub fn read_points(path: &Path, columns: usize) -> Result<PointSet, String> {
    let file =
        File::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    let set = parse_points(BufReader::new(file), columns)
        .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?;
    if set.is_empty() {
        return Err(format!(
            "No points read from {} ({} lines skipped)",
            path.display(),
            set.skipped.len()
        ));
    }
    Ok(set)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn leading_numbers(line: &str) -> Vec<f64> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|tok| !tok.is_empty())
        .map_while(|tok| tok.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect()
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
