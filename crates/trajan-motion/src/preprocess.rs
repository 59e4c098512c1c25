//! Trajectory preprocessing: linear densification.

use crate::error::MotionError;
use crate::trajectory::{Trajectory, TrajectoryView};

/// Densify a trajectory by linear interpolation.
///
/// Inserts `factor - 1` evenly spaced samples between every pair of consecutive
/// samples. Output length is `(n - 1) * factor + 1`; input samples land on every
/// `factor`-th row.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`MotionError::ZeroFactor`] | `factor` is zero |
pub fn upsample(trajectory: TrajectoryView<'_>, factor: usize) -> Result<Trajectory, MotionError> {
    if factor == 0 {
        return Err(MotionError::ZeroFactor);
    }
    let n = trajectory.len();
    let dim = trajectory.dim();
    let mut coords = Vec::with_capacity(((n - 1) * factor + 1) * dim);

    for i in 0..n - 1 {
        let a = trajectory.point(i);
        let b = trajectory.point(i + 1);
        for step in 0..factor {
            let frac = step as f64 / factor as f64;
            coords.extend(a.iter().zip(b).map(|(&u, &v)| u + (v - u) * frac));
        }
    }
    coords.extend_from_slice(trajectory.point(n - 1));

    // convex combinations of finite values stay finite
    Trajectory::new(dim, coords)
}
