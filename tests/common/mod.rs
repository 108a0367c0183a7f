//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use swarm_forecast::io::series::load_series;
use swarm_forecast::pso::PsoParams;

/// Path of the bundled sample price file (header + 80 rows).
pub const SAMPLE_CSV: &str = "data/sample_series.csv";

/// Path of the TOML config that runs over the sample file.
pub const SAMPLE_CONFIG: &str = "scenarios/sample.toml";

/// Second column ("Open") of the sample price file.
pub fn sample_series() -> Vec<f64> {
    load_series(Path::new(SAMPLE_CSV), 1, 1).expect("sample series should load")
}

/// Default coefficients with the given swarm size and run length.
pub fn params(particles: usize, iterations: usize) -> PsoParams {
    PsoParams {
        particles,
        iterations,
        ..PsoParams::default()
    }
}

/// Deterministic generator for reproducible runs.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
