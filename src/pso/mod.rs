//! Particle swarm optimizer fitted to a historical series.
//!
//! Each particle is a full candidate reconstruction of the training series.
//! The objective is the mean squared error against that series, so the
//! global optimum is the series itself.

pub mod fitness;
pub mod optimizer;
pub mod params;
pub mod particle;
pub mod swarm;

pub use optimizer::{
    OptimizationResult, OptimizationState, Optimizer, optimize, optimize_with_os_rng,
};
pub use params::PsoParams;
pub use particle::Particle;
pub use swarm::Swarm;
