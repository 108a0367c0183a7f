//! API response and query types.

use serde::{Deserialize, Serialize};

use crate::config::SwarmConfig;
use crate::report::ForecastRow;
use crate::runner::RunOutput;

/// Forecast table, metrics, and the swarm settings that produced them.
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    /// Swarm settings for this run.
    pub swarm: SwarmConfig,
    /// Training MSE of the fitted vector.
    pub best_fitness: f64,
    /// Rows with an actual value.
    pub compared: usize,
    /// Mean absolute error.
    pub mae: f64,
    /// Root-mean-square error.
    pub rmse: f64,
    /// Largest absolute error.
    pub max_abs_error: f64,
    /// Per-step forecast rows.
    pub rows: Vec<ForecastRow>,
}

/// One point on the combined chart feed.
///
/// Training indices carry only `observed`; indices past the training window
/// carry `forecast` and, where the series extends that far, `observed`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Absolute series index.
    pub index: usize,
    /// Observed value.
    pub observed: Option<f64>,
    /// Forecast value.
    pub forecast: Option<f64>,
}

impl SeriesPoint {
    /// Builds the full chart feed: training values, then the forecast
    /// horizon overlaid on the held-out values.
    pub fn collect(output: &RunOutput) -> Vec<Self> {
        let train_len = output.training.len();
        let horizon = output.result.forecast.len().max(output.actual.len());

        let training = output.training.iter().enumerate().map(|(index, &v)| Self {
            index,
            observed: Some(v),
            forecast: None,
        });
        let projected = (0..horizon).map(|step| Self {
            index: train_len + step,
            observed: output.actual.get(step).copied(),
            forecast: output.result.forecast.get(step).copied(),
        });
        training.chain(projected).collect()
    }
}

/// Global best fitness after one evaluation pass.
#[derive(Debug, Serialize)]
pub struct TracePoint {
    /// Evaluation pass index.
    pub iteration: usize,
    /// Global best fitness at the end of the pass.
    pub global_best_fitness: f64,
}

/// Optional range query parameters for the series endpoint.
#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    /// Start index (inclusive).
    pub from: Option<usize>,
    /// End index (inclusive).
    pub to: Option<usize>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pso::OptimizationResult;
    use crate::report::ForecastReport;

    fn make_output() -> RunOutput {
        let forecast = vec![1.0, 2.0, 1.0];
        RunOutput {
            training: vec![1.0, 2.0],
            actual: vec![1.5],
            report: ForecastReport::from_forecast(&forecast, &[1.5], 2, 0.0),
            result: OptimizationResult {
                best_position: vec![1.0, 2.0],
                best_fitness: 0.0,
                forecast,
                history: vec![0.0],
            },
        }
    }

    #[test]
    fn series_points_cover_training_and_horizon() {
        let points = SeriesPoint::collect(&make_output());
        assert_eq!(points.len(), 5);
        assert_eq!(
            points[1],
            SeriesPoint {
                index: 1,
                observed: Some(2.0),
                forecast: None
            }
        );
        assert_eq!(
            points[2],
            SeriesPoint {
                index: 2,
                observed: Some(1.5),
                forecast: Some(1.0)
            }
        );
        assert_eq!(points[4].observed, None);
        assert_eq!(points[4].forecast, Some(1.0));
    }
}
