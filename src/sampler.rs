use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Estimates pi by Monte Carlo sampling of the unit square.
///
/// Draws `num_samples` uniform points in `[0, 1) x [0, 1)` and counts how
/// many fall inside the unit circle; the estimate is `4 * hits / samples`.
/// The generator is seeded, so a fixed `(num_samples, seed)` pair always
/// produces the same value. Zero samples yields `0.0`.
pub fn approx_pi(num_samples: u32, seed: u64) -> f64 {
    if num_samples == 0 {
        return 0.0;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut hits = 0u32;
    for _ in 0..num_samples {
        let x: f64 = rng.gen();
        let y: f64 = rng.gen();
        if x.hypot(y) <= 1.0 {
            hits += 1;
        }
    }

    4.0 * f64::from(hits) / f64::from(num_samples)
}
