//! Swarm orchestration: evaluation and update phases, global-best tracking,
//! and the `optimize` entry point.

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::fitness::mean_squared_error;
use super::params::PsoParams;
use super::swarm::Swarm;
use crate::error::{ForecastError, Result};
use crate::forecast::PeriodicForecast;

/// Swarm-wide best record, owned by the optimizer.
///
/// Particles read `best_position` during their update but never write it.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationState {
    /// Lowest-fitness position seen by any particle.
    pub best_position: Vec<f64>,
    /// Fitness of `best_position`; `+inf` until the first evaluation.
    pub best_fitness: f64,
}

impl OptimizationState {
    fn new(dim: usize) -> Self {
        Self {
            best_position: vec![0.0; dim],
            best_fitness: f64::INFINITY,
        }
    }

    /// Replaces the global best on strict improvement.
    fn offer(&mut self, position: &[f64], fitness: f64) -> bool {
        if fitness < self.best_fitness {
            self.best_fitness = fitness;
            self.best_position.copy_from_slice(position);
            true
        } else {
            false
        }
    }
}

/// Output of a complete optimization run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationResult {
    /// Global best position, same length as the training series.
    pub best_position: Vec<f64>,
    /// Mean squared error of `best_position` against the training series.
    pub best_fitness: f64,
    /// Periodic tiling of `best_position` to the requested length.
    pub forecast: Vec<f64>,
    /// Global best fitness after each evaluation pass (`max(iterations, 1)` entries).
    pub history: Vec<f64>,
}

/// Particle swarm fitted to a single training series.
///
/// Drives the two-phase loop: every particle is scored and the personal and
/// global bests are updated in swarm order, then every particle moves.
/// The step-level methods are public so callers can observe the run between
/// phases; [`Optimizer::run`] executes the full schedule.
pub struct Optimizer<'a> {
    target: &'a [f64],
    params: PsoParams,
    swarm: Swarm,
    state: OptimizationState,
    history: Vec<f64>,
}

impl<'a> Optimizer<'a> {
    /// Validates the inputs and scatters a fresh swarm around `target`.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::InvalidInput` if `target` is empty or `params`
    /// fail validation. No random numbers are drawn in that case.
    pub fn new<R: Rng + ?Sized>(
        target: &'a [f64],
        params: PsoParams,
        rng: &mut R,
    ) -> Result<Self> {
        validate_series(target)?;
        params.validate()?;

        let swarm = Swarm::scattered_around(target, params.particles, rng);
        Ok(Self {
            target,
            params,
            swarm,
            state: OptimizationState::new(target.len()),
            history: Vec::new(),
        })
    }

    /// Scores every particle and updates personal and global bests.
    ///
    /// Comparisons are strict and run in swarm order, so the last strict
    /// improvement in a pass owns the global best.
    pub fn evaluate(&mut self) {
        for (i, particle) in self.swarm.iter_mut().enumerate() {
            let fitness = mean_squared_error(&particle.position, self.target);
            particle.record_fitness(fitness);
            if self.state.offer(&particle.position, fitness) {
                trace!("particle {i} set global best {fitness:.6e}");
            }
        }
        self.history.push(self.state.best_fitness);
    }

    /// Moves every particle using the current global best.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let global_best = &self.state.best_position;
        for particle in self.swarm.iter_mut() {
            particle.update(&self.params, global_best, rng);
        }
    }

    /// Runs `iterations` evaluate/update rounds and returns the global best.
    ///
    /// Positions produced by the last update are not scored. With zero
    /// iterations the initial swarm is evaluated once so the best is finite.
    pub fn run<R: Rng + ?Sized>(self, rng: &mut R) -> OptimizationState {
        self.run_with_history(rng).0
    }

    /// Like [`Optimizer::run`], but also returns the convergence history.
    pub fn run_with_history<R: Rng + ?Sized>(
        mut self,
        rng: &mut R,
    ) -> (OptimizationState, Vec<f64>) {
        if self.params.iterations == 0 {
            self.evaluate();
        }
        for iter in 0..self.params.iterations {
            self.evaluate();
            debug!("iteration {iter}: global best {:.6e}", self.state.best_fitness);
            self.update(rng);
        }
        (self.state, self.history)
    }

    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    pub fn state(&self) -> &OptimizationState {
        &self.state
    }

    /// Global best fitness after each evaluation pass so far.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn params(&self) -> &PsoParams {
        &self.params
    }
}

fn validate_series(series: &[f64]) -> Result<()> {
    if series.is_empty() {
        return Err(ForecastError::InvalidInput(
            "training series must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Fits a swarm to `series` and tiles the global best into a forecast.
///
/// `rng` is the only randomness source; passing a seeded generator makes the
/// whole result bit-reproducible.
///
/// # Errors
///
/// Returns `ForecastError::InvalidInput` if `series` is empty,
/// `forecast_len` is zero, or `params` fail validation. Validation happens
/// before any random draw, so `rng` is untouched on error.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use swarm_forecast::pso::{PsoParams, optimize};
///
/// let series = [1.0, 2.0, 3.0];
/// let params = PsoParams { particles: 5, iterations: 10, ..PsoParams::default() };
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let result = optimize(&series, 7, &params, &mut rng).unwrap();
/// assert_eq!(result.best_position.len(), 3);
/// assert_eq!(result.forecast.len(), 7);
/// assert_eq!(result.forecast[3], result.best_position[0]);
/// ```
pub fn optimize<R: Rng + ?Sized>(
    series: &[f64],
    forecast_len: usize,
    params: &PsoParams,
    rng: &mut R,
) -> Result<OptimizationResult> {
    validate_series(series)?;
    if forecast_len == 0 {
        return Err(ForecastError::InvalidInput(
            "forecast length must be > 0".to_string(),
        ));
    }
    params.validate()?;

    info!(
        "fitting {} particles to {} values over {} iterations",
        params.particles,
        series.len(),
        params.iterations
    );
    let optimizer = Optimizer::new(series, *params, rng)?;
    let (state, history) = optimizer.run_with_history(rng);
    info!("best fitness {:.6e}", state.best_fitness);

    let forecast = PeriodicForecast.forecast(&state.best_position, forecast_len);
    Ok(OptimizationResult {
        best_position: state.best_position,
        best_fitness: state.best_fitness,
        forecast,
        history,
    })
}

/// [`optimize`] with a generator seeded from operating-system entropy.
///
/// # Errors
///
/// Same as [`optimize`].
pub fn optimize_with_os_rng(
    series: &[f64],
    forecast_len: usize,
    params: &PsoParams,
) -> Result<OptimizationResult> {
    let mut rng = StdRng::from_os_rng();
    optimize(series, forecast_len, params, &mut rng)
}
