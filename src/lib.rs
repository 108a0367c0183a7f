//! Particle-swarm fitting and periodic forecasting of a numeric series.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod error;
pub mod forecast;
pub mod io;
/// Swarm, particles, fitness, and the optimizer loop.
pub mod pso;
pub mod report;
pub mod runner;

pub use error::{ForecastError, Result};
pub use pso::{OptimizationResult, PsoParams, optimize, optimize_with_os_rng};
