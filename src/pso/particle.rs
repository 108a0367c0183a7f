use rand::Rng;

use super::params::PsoParams;

/// Half-width of the uniform offset applied to each initial coordinate.
pub const POSITION_JITTER: f64 = 0.05;
/// Half-width of the uniform range for each initial velocity component.
pub const VELOCITY_JITTER: f64 = 0.1;

/// A candidate reconstruction of the training series moving through the
/// search space.
///
/// `position`, `velocity`, and `best_position` always share the length
/// fixed at construction. `best_fitness` is the cached score of
/// `best_position` and never increases.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Current candidate vector.
    pub position: Vec<f64>,
    /// Per-dimension step applied on the next update.
    pub velocity: Vec<f64>,
    /// Lowest-fitness position this particle has held.
    pub best_position: Vec<f64>,
    /// Fitness of `best_position`; `+inf` until the first evaluation.
    pub best_fitness: f64,
}

impl Particle {
    /// Creates a particle from explicit position and velocity buffers.
    ///
    /// The personal best starts as a copy of `position` with infinite
    /// fitness, so the first evaluation always records it. Both buffers must
    /// have the same length.
    pub(crate) fn new(position: Vec<f64>, velocity: Vec<f64>) -> Self {
        debug_assert_eq!(
            position.len(),
            velocity.len(),
            "position and velocity must have equal length"
        );
        Self {
            best_position: position.clone(),
            position,
            velocity,
            best_fitness: f64::INFINITY,
        }
    }

    /// Creates a particle scattered around `series`.
    ///
    /// Each coordinate is `series[j]` plus an offset drawn uniformly from
    /// `[-0.05, 0.05)`, and each velocity component is drawn from
    /// `[-0.1, 0.1)`. Draws are interleaved per dimension: offset, then
    /// velocity.
    pub fn scattered_around<R: Rng + ?Sized>(series: &[f64], rng: &mut R) -> Self {
        let mut position = Vec::with_capacity(series.len());
        let mut velocity = Vec::with_capacity(series.len());
        for &value in series {
            position.push(value + rng.random_range(-POSITION_JITTER..POSITION_JITTER));
            velocity.push(rng.random_range(-VELOCITY_JITTER..VELOCITY_JITTER));
        }
        Self::new(position, velocity)
    }

    /// Number of dimensions.
    pub fn dim(&self) -> usize {
        self.position.len()
    }

    /// Records `fitness` for the current position.
    ///
    /// Replaces the personal best only on strict improvement; ties and
    /// non-finite regressions leave it untouched.
    ///
    /// # Returns
    ///
    /// `true` if the personal best was replaced.
    pub fn record_fitness(&mut self, fitness: f64) -> bool {
        if fitness < self.best_fitness {
            self.best_fitness = fitness;
            self.best_position.copy_from_slice(&self.position);
            true
        } else {
            false
        }
    }

    /// Applies one velocity and position update.
    ///
    /// For every dimension `j`, with `r1, r2` drawn uniformly from `[0, 1)`:
    ///
    /// ```text
    /// v[j] = w*v[j] + c1*r1*(pbest[j] - x[j]) + c2*r2*(gbest[j] - x[j])
    /// x[j] = x[j] + v[j]
    /// ```
    ///
    /// No clamping is applied to either vector.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        params: &PsoParams,
        global_best: &[f64],
        rng: &mut R,
    ) {
        debug_assert_eq!(global_best.len(), self.dim());
        let coords = self
            .position
            .iter_mut()
            .zip(self.velocity.iter_mut())
            .zip(self.best_position.iter().zip(global_best));

        for ((x, v), (&pbest, &gbest)) in coords {
            let r1: f64 = rng.random();
            let r2: f64 = rng.random();
            *v = params.inertia * *v
                + params.cognitive * r1 * (pbest - *x)
                + params.social * r2 * (gbest - *x);
            *x += *v;
        }
    }
}
