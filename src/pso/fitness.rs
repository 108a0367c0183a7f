//! Objective function scoring a candidate against the training series.

/// Mean squared error between a candidate position and the target series.
///
/// Lower is better; `0.0` means the candidate reproduces the target exactly.
/// Both slices must have the same non-zero length, which the optimizer
/// guarantees by construction.
///
/// # Examples
///
/// ```
/// use swarm_forecast::pso::fitness::mean_squared_error;
///
/// let mse = mean_squared_error(&[1.0, 2.0, 4.0], &[1.0, 2.0, 3.0]);
/// assert!((mse - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn mean_squared_error(position: &[f64], target: &[f64]) -> f64 {
    debug_assert_eq!(position.len(), target.len());
    let sq_sum: f64 = position
        .iter()
        .zip(target)
        .map(|(p, t)| (p - t) * (p - t))
        .sum();
    sq_sum / target.len() as f64
}
