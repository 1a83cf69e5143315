use std::time::Instant;

use crate::simulation::states::{Body, NVec2, Universe};

/// Helper to build a deterministic universe of `n` bodies, no rand needed
fn make_universe(n: usize) -> Universe {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new(
            (i_f * 0.37).sin() * 1.0e11,
            (i_f * 0.13).cos() * 1.0e11,
        );
        let v = NVec2::new((i_f * 0.07).sin() * 3.0e4, 0.0);

        bodies.push(Body::new(x, v, 5.974e24, format!("body{i}")));
    }

    Universe::with_bodies(bodies, 1.0e11)
}

/// Time `Universe::step` for a range of body counts
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() {
    let ns = [50, 100, 200, 400, 800];
    let dt = 25_000.0;

    println!("N,step_ms");

    for n in ns {
        let mut universe = make_universe(n);

        // Small n: average over more steps to smooth noise
        let steps = if n <= 200 { 20 } else { 5 };

        // Warm-up
        universe.step(dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            universe.step(dt);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
