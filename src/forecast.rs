//! Forecast extraction from a fitted vector.

/// Periodic "repeat the fit" forecaster.
///
/// Tiles the fitted vector to the requested horizon:
/// `forecast[i] = fitted[i % fitted.len()]`. No trend or smoothing is
/// applied; a horizon shorter than the fit truncates it.
#[derive(Debug, Default, Clone, Copy)]
pub struct PeriodicForecast;

impl PeriodicForecast {
    /// Produce a periodic forecast for the given horizon.
    ///
    /// # Arguments
    ///
    /// * `fitted` - Fitted values used as the repeating template
    /// * `horizon` - Number of steps to forecast
    ///
    /// # Returns
    ///
    /// A vector of length `horizon`, or an empty vector if `fitted` is empty.
    pub fn forecast(&self, fitted: &[f64], horizon: usize) -> Vec<f64> {
        fitted.iter().copied().cycle().take(horizon).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::PeriodicForecast;

    #[test]
    fn forecast_matches_horizon_length() {
        let fitted = vec![1.0, 2.0, 3.0];
        let forecast = PeriodicForecast.forecast(&fitted, 7);
        assert_eq!(forecast.len(), 7);
    }

    #[test]
    fn forecast_tiles_fitted_vector() {
        let bp = [0.5, 1.5, 2.5];
        let forecast = PeriodicForecast.forecast(&bp, 10);
        assert_eq!(
            forecast,
            vec![bp[0], bp[1], bp[2], bp[0], bp[1], bp[2], bp[0], bp[1], bp[2], bp[0]]
        );
    }

    #[test]
    fn forecast_truncates_longer_fit() {
        let fitted: Vec<f64> = (0..600).map(f64::from).collect();
        let forecast = PeriodicForecast.forecast(&fitted, 30);
        assert_eq!(forecast, fitted[..30].to_vec());
    }

    #[test]
    fn forecast_copies_fit_when_equal() {
        let fitted = vec![0.5, 1.0, 1.5, 2.0];
        let forecast = PeriodicForecast.forecast(&fitted, fitted.len());
        assert_eq!(forecast, fitted);
    }

    #[test]
    fn empty_inputs_yield_empty_forecast() {
        assert!(PeriodicForecast.forecast(&[], 5).is_empty());
        assert!(PeriodicForecast.forecast(&[1.0], 0).is_empty());
    }
}
