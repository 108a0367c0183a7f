//! End-to-end run: load the series, split it, fit the swarm, and compare
//! the forecast with the held-out values.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{ConfigError, DataConfig, RunConfig};
use crate::error::{ForecastError, Result};
use crate::io::series::load_series;
use crate::pso::{OptimizationResult, PsoParams, optimize};
use crate::report::ForecastReport;

/// Everything produced by one run, kept together for printing, export, and
/// the API.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Values the swarm was fitted to.
    pub training: Vec<f64>,
    /// Observed values following the training window (may be shorter than
    /// the forecast).
    pub actual: Vec<f64>,
    /// Optimizer output, including the forecast and convergence history.
    pub result: OptimizationResult,
    /// Forecast paired with `actual`.
    pub report: ForecastReport,
}

/// Splits `series` into the training window and the values after it.
///
/// The holdout slice holds at most `holdout_len` values and may be empty
/// when the series ends at the training window.
///
/// # Errors
///
/// Returns `ForecastError::InsufficientData` if `series` is shorter than
/// `train_len`.
pub fn split_series(
    series: &[f64],
    train_len: usize,
    holdout_len: usize,
) -> Result<(&[f64], &[f64])> {
    if series.len() < train_len {
        return Err(ForecastError::InsufficientData {
            needed: train_len,
            available: series.len(),
        });
    }
    let (training, rest) = series.split_at(train_len);
    let holdout = &rest[..rest.len().min(holdout_len)];
    Ok((training, holdout))
}

/// Fits and forecasts an already-loaded series.
///
/// The forecast always spans `data.holdout_len` steps.
///
/// # Errors
///
/// Returns an error if the series is too short or the optimizer rejects its
/// inputs.
pub fn run_series<R: Rng + ?Sized>(
    series: &[f64],
    data: &DataConfig,
    params: &PsoParams,
    rng: &mut R,
) -> Result<RunOutput> {
    let (training, actual) = split_series(series, data.train_len, data.holdout_len)?;
    info!(
        "training on {} values, forecasting {} ({} observed)",
        training.len(),
        data.holdout_len,
        actual.len()
    );

    let result = optimize(training, data.holdout_len, params, rng)?;
    let report = ForecastReport::from_forecast(
        &result.forecast,
        actual,
        data.train_len,
        result.best_fitness,
    );

    Ok(RunOutput {
        training: training.to_vec(),
        actual: actual.to_vec(),
        result,
        report,
    })
}

/// Executes a configured run from the CSV file named in `config`.
///
/// Uses `config.swarm.seed` when present, otherwise an OS-seeded generator.
///
/// # Errors
///
/// Returns an error if no data path is configured, the file cannot be read,
/// or the run fails.
pub fn run(config: &RunConfig) -> Result<RunOutput> {
    let path = config
        .data
        .path
        .as_deref()
        .ok_or_else(|| ConfigError {
            field: "data.path".to_string(),
            message: "a CSV file is required".to_string(),
        })?;

    let series = load_series(path, config.data.column, config.data.header_rows)?;
    let mut rng = match config.swarm.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    run_series(&series, &config.data, &config.swarm.params(), &mut rng)
}
