use grid_analyzer::prelude::*;

fn main() {
    // Demo: a 10x10 lattice with sub-0.01 jitter, one intersection removed.
    let (nx, ny) = (10usize, 10usize);
    let (dx, dy) = (280.0 / 9.0, 175.0 / 9.0);
    let mut samples: Vec<Point2<f64>> = Vec::with_capacity(nx * ny);
    for i in 0..nx {
        for j in 0..ny {
            if (i, j) == (4, 6) {
                continue;
            }
            let k = (i * ny + j) as f64;
            let jitter_x = 0.008 * (k * 1.7).sin();
            let jitter_y = 0.008 * (k * 2.3).cos();
            samples.push(Point2::new(
                i as f64 * dx + jitter_x,
                j as f64 * dy + jitter_y,
            ));
        }
    }

    let res = GridAnalyzer::default().analyze(&samples);
    println!(
        "nx={} ny={} dx={:.3} dy={:.3} regular=({}, {}) missing={}",
        res.nx, res.ny, res.dx, res.dy, res.regular_x, res.regular_y, res.missing_points
    );
}
