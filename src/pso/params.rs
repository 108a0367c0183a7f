//! Swarm size, run length, and update coefficients.

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Tuning constants for one optimization run.
///
/// All values are fixed for the whole run. The defaults are the classic
/// constriction-free settings: 30 particles, 100 iterations, inertia 0.7,
/// cognitive and social coefficients 1.5.
///
/// # Examples
///
/// ```
/// use swarm_forecast::pso::PsoParams;
///
/// let params = PsoParams::default();
/// assert_eq!(params.particles, 30);
/// assert_eq!(params.iterations, 100);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PsoParams {
    /// Number of particles in the swarm (must be > 0).
    pub particles: usize,
    /// Number of evaluate-then-update iterations.
    pub iterations: usize,
    /// Weight on the particle's previous velocity.
    pub inertia: f64,
    /// Pull toward the particle's own best position.
    pub cognitive: f64,
    /// Pull toward the swarm's global best position.
    pub social: f64,
}

impl Default for PsoParams {
    fn default() -> Self {
        Self {
            particles: 30,
            iterations: 100,
            inertia: 0.7,
            cognitive: 1.5,
            social: 1.5,
        }
    }
}

impl PsoParams {
    /// Checks that the parameters describe a runnable swarm.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::InvalidInput` if the swarm is empty or any
    /// coefficient is NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        if self.particles == 0 {
            return Err(ForecastError::InvalidInput(
                "particle count must be > 0".to_string(),
            ));
        }
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if !value.is_finite() {
                return Err(ForecastError::InvalidInput(format!(
                    "{name} coefficient must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_constants() {
        let p = PsoParams::default();
        assert_eq!(p.particles, 30);
        assert_eq!(p.iterations, 100);
        assert_eq!(p.inertia, 0.7);
        assert_eq!(p.cognitive, 1.5);
        assert_eq!(p.social, 1.5);
    }

    #[test]
    fn zero_particles_rejected() {
        let p = PsoParams {
            particles: 0,
            ..PsoParams::default()
        };
        assert!(matches!(p.validate(), Err(ForecastError::InvalidInput(_))));
    }

    #[test]
    fn zero_iterations_allowed() {
        let p = PsoParams {
            iterations: 0,
            ..PsoParams::default()
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn nan_coefficient_rejected() {
        let p = PsoParams {
            social: f64::NAN,
            ..PsoParams::default()
        };
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("social"));
    }
}
