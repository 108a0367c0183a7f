//! Predicted-vs-actual comparison computed after a run.

use std::fmt;

use serde::Serialize;

/// One forecast step paired with the observed value, when there is one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRow {
    /// Offset into the forecast horizon (0-based).
    pub step: usize,
    /// Absolute position in the full series (`train_len + step`).
    pub index: usize,
    /// Forecast value.
    pub forecast: f64,
    /// Observed value, if the series extends this far.
    pub actual: Option<f64>,
}

impl ForecastRow {
    /// Absolute forecast error, if an actual value exists.
    pub fn abs_error(&self) -> Option<f64> {
        self.actual.map(|a| (self.forecast - a).abs())
    }
}

/// Forecast table plus error metrics over the rows that have actual values.
///
/// Metrics are zero when no row can be compared.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    /// Training fitness of the fitted vector (MSE).
    pub best_fitness: f64,
    /// Per-step forecast rows.
    pub rows: Vec<ForecastRow>,
    /// Number of rows with an actual value.
    pub compared: usize,
    /// Mean absolute error.
    pub mae: f64,
    /// Root-mean-square error.
    pub rmse: f64,
    /// Largest absolute error.
    pub max_abs_error: f64,
}

impl ForecastReport {
    /// Pairs `forecast` with `actual` step by step.
    ///
    /// # Arguments
    ///
    /// * `forecast` - Forecast values
    /// * `actual` - Observed values following the training window (may be shorter)
    /// * `start_index` - Series index of the first forecast step
    /// * `best_fitness` - Training MSE of the fitted vector
    pub fn from_forecast(
        forecast: &[f64],
        actual: &[f64],
        start_index: usize,
        best_fitness: f64,
    ) -> Self {
        let rows: Vec<ForecastRow> = forecast
            .iter()
            .enumerate()
            .map(|(step, &value)| ForecastRow {
                step,
                index: start_index + step,
                forecast: value,
                actual: actual.get(step).copied(),
            })
            .collect();

        let mut compared = 0_usize;
        let mut abs_sum = 0.0_f64;
        let mut sq_sum = 0.0_f64;
        let mut max_abs = 0.0_f64;
        for err in rows.iter().filter_map(ForecastRow::abs_error) {
            compared += 1;
            abs_sum += err;
            sq_sum += err * err;
            max_abs = max_abs.max(err);
        }

        let (mae, rmse) = if compared > 0 {
            let n = compared as f64;
            (abs_sum / n, (sq_sum / n).sqrt())
        } else {
            (0.0, 0.0)
        };

        Self {
            best_fitness,
            rows,
            compared,
            mae,
            rmse,
            max_abs_error: max_abs,
        }
    }
}

impl fmt::Display for ForecastReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<15} {:<15}", "Predicted", "Actual")?;
        writeln!(f, "--------------------------------")?;
        for row in &self.rows {
            match row.actual {
                Some(actual) => writeln!(f, "{:<15.4} {:<15.4}", row.forecast, actual)?,
                None => writeln!(f, "{:<15.4} {:<15}", row.forecast, "-")?,
            }
        }
        writeln!(f)?;
        writeln!(f, "--- Forecast Report ---")?;
        writeln!(f, "Training MSE:      {:.6}", self.best_fitness)?;
        writeln!(f, "Compared steps:    {}/{}", self.compared, self.rows.len())?;
        writeln!(f, "MAE:               {:.4}", self.mae)?;
        writeln!(f, "RMSE:              {:.4}", self.rmse)?;
        write!(f, "Max abs error:     {:.4}", self.max_abs_error)
    }
}
