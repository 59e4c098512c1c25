//! Jump lengths between consecutive samples.

use crate::trajectory::TrajectoryView;

/// Euclidean distance between every pair of consecutive samples.
///
/// Returns `n - 1` values; a single-sample trajectory yields an empty vector.
#[must_use]
pub fn jump_lengths(trajectory: TrajectoryView<'_>) -> Vec<f64> {
    let n = trajectory.len();
    (1..n)
        .map(|i| euclidean(trajectory.point(i - 1), trajectory.point(i)))
        .collect()
}

pub(crate) fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    squared_euclidean(a, b).sqrt()
}

pub(crate) fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum()
}
