use nalgebra::Point2;

/// Deterministic pseudo-noise in `[-1, 1]`.
pub fn jitter(k: usize, salt: f64) -> f64 {
    (k as f64 * salt + 0.5).sin()
}

/// Samples on an exact `nx` x `ny` lattice with origin `(x0, y0)`.
pub fn lattice(nx: usize, ny: usize, dx: f64, dy: f64, x0: f64, y0: f64) -> Vec<Point2<f64>> {
    assert!(nx > 0 && ny > 0, "lattice dimensions must be positive");
    let mut samples = Vec::with_capacity(nx * ny);
    for i in 0..nx {
        for j in 0..ny {
            samples.push(Point2::new(x0 + i as f64 * dx, y0 + j as f64 * dy));
        }
    }
    samples
}

/// Lattice with every coordinate perturbed by at most `amplitude`.
pub fn jittered_lattice(
    nx: usize,
    ny: usize,
    dx: f64,
    dy: f64,
    amplitude: f64,
) -> Vec<Point2<f64>> {
    lattice(nx, ny, dx, dy, 0.0, 0.0)
        .into_iter()
        .enumerate()
        .map(|(k, p)| {
            Point2::new(
                p.x + amplitude * jitter(k, 1.7),
                p.y + amplitude * jitter(k, 2.9),
            )
        })
        .collect()
}

/// Deterministic reordering: odd indices reversed, then even indices.
pub fn scrambled(samples: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let odd = samples.iter().skip(1).step_by(2).rev();
    let even = samples.iter().step_by(2);
    odd.chain(even).copied().collect()
}
