mod common;

use common::synthetic_lattice::{jittered_lattice, lattice, scrambled};
use grid_analyzer::{
    analyze, analyze_pairs, AnalysisOutcome, AnalyzerParams, AxisLabel, GridAnalysis,
    GridAnalyzer, MergeStrategy, PresenceStrategy,
};
use nalgebra::Point2;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn perfect_lattices_are_recovered_exactly() {
    init_logging();
    for &(nx, ny, dx, dy) in &[
        (2usize, 2usize, 1.0, 1.0),
        (3, 7, 2.5, 0.4),
        (12, 5, 31.0, 19.0),
        (20, 20, 0.125, 0.25),
    ] {
        let samples = lattice(nx, ny, dx, dy, -7.0, 3.0);
        let res = analyze(&samples, 0.05, 0.2, 0.10);
        assert!(res.is_regular(), "{nx}x{ny} not regular: {res:?}");
        assert_eq!((res.nx, res.ny), (nx, ny));
        assert!((res.dx - dx).abs() < 1e-9, "dx={} expected {dx}", res.dx);
        assert!((res.dy - dy).abs() < 1e-9, "dy={} expected {dy}", res.dy);
        assert!((res.x_min + 7.0).abs() < 1e-9);
        assert!((res.y_max - (3.0 + (ny - 1) as f64 * dy)).abs() < 1e-9);
        assert_eq!(res.missing_points, 0);
    }
}

#[test]
fn ten_by_ten_scan_with_small_noise() {
    init_logging();
    let samples = jittered_lattice(10, 10, 280.0 / 9.0, 175.0 / 9.0, 0.009);
    assert_eq!(samples.len(), 100);
    let res = GridAnalyzer::default().analyze(&samples);
    assert_eq!((res.nx, res.ny), (10, 10));
    assert!(res.regular_x && res.regular_y);
    assert!((res.dx - 31.11).abs() < 0.01, "dx={}", res.dx);
    assert!((res.dy - 19.44).abs() < 0.01, "dy={}", res.dy);
    assert_eq!(res.missing_points, 0);
}

#[test]
fn non_finite_sample_makes_the_scan_inconclusive() {
    init_logging();
    for bad in [Point2::new(f64::NAN, 50.0), Point2::new(120.0, f64::INFINITY)] {
        let mut samples = jittered_lattice(10, 10, 280.0 / 9.0, 175.0 / 9.0, 0.009);
        samples.push(bad);
        let res = analyze(&samples, 0.05, 0.2, 0.10);
        assert_eq!(res, GridAnalysis::default(), "{bad:?}");
        assert!(!res.is_conclusive());
    }

    let mut samples = jittered_lattice(10, 10, 280.0 / 9.0, 175.0 / 9.0, 0.009);
    samples.push(Point2::new(f64::NAN, 50.0));
    let report = GridAnalyzer::default().analyze_with_diagnostics(&samples);
    assert_eq!(
        report.trace.outcome,
        AnalysisOutcome::AxisCollapsed { axis: AxisLabel::X }
    );
    assert!(report.trace.presence.is_none());
}

#[test]
fn repeated_analysis_is_bit_identical() {
    let samples = jittered_lattice(9, 6, 4.0, 7.0, 0.01);
    let analyzer = GridAnalyzer::default();
    let first = analyzer.analyze(&samples);
    let second = analyzer.analyze(&samples);
    assert_eq!(first, second);
    assert_eq!(first.dx.to_bits(), second.dx.to_bits());
    assert_eq!(first.dy.to_bits(), second.dy.to_bits());
}

#[test]
fn input_order_does_not_matter() {
    let samples = jittered_lattice(8, 5, 3.0, 2.0, 0.005);
    let analyzer = GridAnalyzer::default();
    assert_eq!(analyzer.analyze(&samples), analyzer.analyze(&scrambled(&samples)));
}

#[test]
fn raising_tolerance_never_breaks_regularity() {
    // x gaps 10, 11, 9, 12: mean 10.5, spread 1.0, variation ~0.095.
    let xs = [0.0, 10.0, 21.0, 30.0, 42.0];
    let samples: Vec<Point2<f64>> = xs
        .iter()
        .flat_map(|&x| [0.0, 5.0, 10.0].map(|y| Point2::new(x, y)))
        .collect();

    let mut seen_regular = false;
    for tolerance in [0.01, 0.05, 0.09, 0.1, 0.2, 0.5, 1.0] {
        let res = analyze(&samples, tolerance, 0.2, 0.10);
        assert!(res.regular_y);
        if seen_regular {
            assert!(res.regular_x, "tolerance {tolerance} turned x irregular");
        }
        seen_regular |= res.regular_x;
        assert_eq!(res.regular_x, tolerance > 0.0953, "tolerance {tolerance}");
    }
    assert!(seen_regular);
}

#[test]
fn noise_below_merge_tolerance_keeps_counts_and_flags() {
    let (nx, ny, dx, dy) = (8usize, 6usize, 5.0, 3.0);
    let clean = lattice(nx, ny, dx, dy, 0.0, 0.0);
    let report = GridAnalyzer::default().analyze_with_diagnostics(&clean);
    let guess_x = report.trace.x_axis.as_ref().unwrap().step_guess;
    let guess_y = report.trace.y_axis.as_ref().unwrap().step_guess;
    let amplitude = 0.4 * 0.10 * guess_x.min(guess_y);

    let noisy = jittered_lattice(nx, ny, dx, dy, amplitude);
    let res = GridAnalyzer::default().analyze(&noisy);
    let base = report.analysis;
    assert_eq!((res.nx, res.ny), (base.nx, base.ny));
    assert_eq!((res.regular_x, res.regular_y), (base.regular_x, base.regular_y));
    assert_eq!(res.missing_points, 0);
}

#[test]
fn removing_one_interior_sample_adds_one_missing_point() {
    let (nx, ny) = (10usize, 10usize);
    let full = jittered_lattice(nx, ny, 280.0 / 9.0, 175.0 / 9.0, 0.009);
    let base = GridAnalyzer::default().analyze(&full);
    assert_eq!(base.missing_points, 0);

    for (i, j) in [(1usize, 1usize), (4, 6), (8, 3)] {
        let mut samples = full.clone();
        samples.remove(i * ny + j);
        let res = GridAnalyzer::default().analyze(&samples);
        assert_eq!(res.missing_points, 1, "removed ({i}, {j})");
        assert_eq!((res.nx, res.ny), (base.nx, base.ny));
        assert_eq!((res.regular_x, res.regular_y), (base.regular_x, base.regular_y));
    }
}

#[test]
fn sparse_inputs_return_default_result() {
    let pts = lattice(2, 2, 1.0, 1.0, 0.0, 0.0);
    for n in 0..4 {
        let res = GridAnalyzer::default().analyze(&pts[..n]);
        assert_eq!(res, GridAnalysis::default(), "n={n}");
        assert!(!res.regular_x && !res.regular_y);
        assert_eq!(res.missing_points, 0);
    }
}

#[test]
fn identical_x_values_are_not_regular() {
    let samples: Vec<Point2<f64>> = (0..6).map(|j| Point2::new(2.0, j as f64)).collect();
    let report = GridAnalyzer::default().analyze_with_diagnostics(&samples);
    assert!(!report.analysis.regular_x);
    assert_eq!(report.analysis, GridAnalysis::default());
    assert!(matches!(
        report.trace.outcome,
        AnalysisOutcome::AxisCollapsed { .. }
    ));
}

#[test]
fn fully_coincident_samples_do_not_panic() {
    let samples = vec![Point2::new(1.5, -2.0); 9];
    let res = GridAnalyzer::default().analyze(&samples);
    assert_eq!(res, GridAnalysis::default());
}

#[test]
fn diagonal_samples_report_missing_intersections() {
    let pairs: Vec<(f64, f64)> = (0..5).map(|i| (i as f64 * 2.0, i as f64 * 3.0)).collect();
    let res = analyze_pairs(&pairs, 0.05, 0.2, 0.10);
    assert!(res.is_regular());
    assert_eq!((res.nx, res.ny), (5, 5));
    assert_eq!(res.missing_points, 20);
    assert!(res.missing_points <= res.expected_points());
    assert!((res.completeness() - 0.2).abs() < 1e-12);
}

#[test]
fn irregular_axis_is_conclusive_but_flagged() {
    let xs = [0.0, 1.0, 5.0, 6.0];
    let samples: Vec<Point2<f64>> = xs
        .iter()
        .flat_map(|&x| [0.0, 2.0].map(|y| Point2::new(x, y)))
        .collect();
    let res = GridAnalyzer::default().analyze(&samples);
    assert!(res.is_conclusive());
    assert!(!res.regular_x);
    assert!(res.regular_y);
}

#[test]
fn centroid_merge_absorbs_creeping_columns() {
    // Each column drifts by 0.15 per row: within the merge tolerance between
    // neighbours, beyond it across the whole column.
    let mut samples = Vec::new();
    for i in 0..5 {
        for j in 0..4 {
            samples.push(Point2::new(i as f64 * 10.0 + j as f64 * 0.15, j as f64 * 5.0));
        }
    }

    let greedy = GridAnalyzer::default().analyze(&samples);
    assert_eq!(greedy.nx, 10);
    assert!(!greedy.regular_x);

    let centroid = GridAnalyzer::new(AnalyzerParams {
        merge_strategy: MergeStrategy::ClusterCentroid,
        ..AnalyzerParams::default()
    })
    .analyze(&samples);
    assert_eq!((centroid.nx, centroid.ny), (5, 4));
    assert!(centroid.is_regular());
    assert!((centroid.x_min - 0.225).abs() < 1e-9);
    assert_eq!(centroid.missing_points, 0);
}

#[test]
fn large_inputs_switch_to_bucket_index() {
    let mut samples = jittered_lattice(60, 40, 2.0, 1.5, 0.0005);
    for k in [41usize, 1234, 2001] {
        samples.remove(k);
    }
    assert!(samples.len() > grid_analyzer::analyzer::DEFAULT_BUCKET_THRESHOLD);

    let auto = GridAnalyzer::default().analyze_with_diagnostics(&samples);
    let presence = auto.trace.presence.as_ref().expect("presence stage");
    assert_eq!(presence.strategy, PresenceStrategy::Bucketed);

    let linear = GridAnalyzer::new(AnalyzerParams {
        presence_strategy: PresenceStrategy::Linear,
        parallel: true,
        ..AnalyzerParams::default()
    })
    .analyze(&samples);
    assert_eq!(auto.analysis, linear);
    assert_eq!(linear.missing_points, 3);
    assert_eq!((linear.nx, linear.ny), (60, 40));
}
