use grid_analyzer::config::{self, OutputFormat};
use grid_analyzer::points::{read_points, write_json_file};
use grid_analyzer::{AnalysisReport, GridAnalyzer};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: grid_scan <config.json>".to_string()
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = config::load_config(Path::new(&config_path))?;

    let points = read_points(&config.input, config.columns)?;
    let samples = points.project_xy(config.x_column, config.y_column)?;

    let analyzer = GridAnalyzer::new(config.analyzer.to_params());
    let report = analyzer.analyze_with_diagnostics(&samples);

    let format = config.output.format;
    if format.includes_text() {
        println!(
            "Read {} points from {} ({} lines skipped)",
            points.len(),
            config.input.display(),
            points.skipped.len()
        );
        print_text_summary(&report);
    }

    if format.includes_json() {
        if let Some(path) = &config.output.json_out {
            write_json_file(path, &report.analysis)?;
            println!("JSON result written to {}", path.display());
        } else {
            let json = serde_json::to_string_pretty(&report.analysis)
                .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
            if format == OutputFormat::Both {
                println!("\nJSON result:\n{json}");
            } else {
                println!("{json}");
            }
        }
    }

    if let Some(path) = &config.output.report_out {
        write_json_file(path, &report)?;
        if format.includes_text() {
            println!("Diagnostics report written to {}", path.display());
        } else {
            eprintln!("Diagnostics report written to {}", path.display());
        }
    }

    Ok(())
}

fn print_text_summary(report: &AnalysisReport) {
    let res = &report.analysis;
    let trace = &report.trace;
    println!("Grid summary");
    println!("  outcome: {}", trace.outcome.describe());
    println!("  nx x ny: {} x {}", res.nx, res.ny);
    println!("  dx: {:.4}  regular_x: {}", res.dx, res.regular_x);
    println!("  dy: {:.4}  regular_y: {}", res.dy, res.regular_y);
    println!(
        "  extents: x=[{:.4}, {:.4}] y=[{:.4}, {:.4}]",
        res.x_min, res.x_max, res.y_min, res.y_max
    );
    println!(
        "  missing: {} of {} (completeness {:.1}%)",
        res.missing_points,
        res.expected_points(),
        100.0 * res.completeness()
    );

    for axis in [&trace.x_axis, &trace.y_axis].into_iter().flatten() {
        println!(
            "  {:?} axis: raw={} merged={} step_guess={:.4} merge_eps={:.4} variation={}",
            axis.axis,
            axis.raw_count,
            axis.merged.len(),
            axis.step_guess,
            axis.merge_eps,
            format_opt(axis.variation)
        );
    }
    if let Some(presence) = &trace.presence {
        println!(
            "  presence: eps={:.4} strategy={:?} parallel={} candidates={} elapsed_ms={:.3}",
            presence.epsilon,
            presence.strategy,
            presence.parallel,
            presence.candidates,
            presence.elapsed_ms
        );
        for [x, y] in &presence.missing {
            println!("    missing intersection at ({x:.4}, {y:.4})");
        }
    }
    println!("  total_ms: {:.3}", trace.timings.total_ms);

    if !res.is_regular() {
        println!("Points are not on a regular grid, skipping lattice-indexed output");
    }
}

fn format_opt(val: Option<f64>) -> String {
    val.map(|v| format!("{:.4}", v))
        .unwrap_or_else(|| "-".to_string())
}
