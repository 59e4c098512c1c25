//! Descriptive statistics over whole trajectories.

use crate::trajectory::TrajectoryView;

/// Population standard deviation of all coordinate values, flattened across axes.
///
/// This is a sanity descriptor: the spread of the raw numbers, not a per-axis or
/// displacement statistic.
#[must_use]
pub fn std_dev(trajectory: TrajectoryView<'_>) -> f64 {
    population_variance(trajectory.as_slice()).sqrt()
}

/// Mean of a non-empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Variance dividing by `n`. Two-pass for numerical stability.
pub(crate) fn population_variance(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|&v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::Trajectory;

    #[test]
    fn flattened_not_per_axis() {
        // values 0, 2, 0, 2 -> mean 1, variance 1
        let t = Trajectory::from_rows(&[[0.0, 2.0], [0.0, 2.0]]).unwrap();
        assert!((std_dev(t.as_view()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_is_zero() {
        let t = Trajectory::from_rows(&[[3.0, 3.0], [3.0, 3.0]]).unwrap();
        assert_eq!(std_dev(t.as_view()), 0.0);
    }
}
