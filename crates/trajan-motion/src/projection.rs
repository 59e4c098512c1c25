//! Scalar projections of multi-dimensional trajectories.

use serde::{Deserialize, Serialize};

use crate::error::MotionError;
use crate::trajectory::TrajectoryView;

/// How a multi-dimensional trajectory is reduced to a scalar series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    /// A single coordinate axis.
    Axis(usize),
    /// Euclidean distance from the origin.
    #[default]
    Radial,
}

impl Projection {
    /// Derive the scalar series for `trajectory`.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::AxisOutOfRange`] for an axis the trajectory lacks.
    pub fn apply(&self, trajectory: TrajectoryView<'_>) -> Result<Vec<f64>, MotionError> {
        match *self {
            Self::Axis(axis) => trajectory.axis(axis),
            Self::Radial => Ok(radial(trajectory)),
        }
    }
}

/// Distance of every sample from the origin.
#[must_use]
pub fn radial(trajectory: TrajectoryView<'_>) -> Vec<f64> {
    trajectory
        .points()
        .map(|p| p.iter().map(|v| v * v).sum::<f64>().sqrt())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::Trajectory;

    #[test]
    fn radial_distance() {
        let t = Trajectory::from_rows(&[[3.0, 4.0], [0.0, -2.0]]).unwrap();
        assert_eq!(Projection::Radial.apply(t.as_view()).unwrap(), vec![5.0, 2.0]);
    }

    #[test]
    fn axis_projection() {
        let t = Trajectory::from_rows(&[[3.0, 4.0], [0.0, -2.0]]).unwrap();
        assert_eq!(Projection::Axis(1).apply(t.as_view()).unwrap(), vec![4.0, -2.0]);
        assert!(Projection::Axis(2).apply(t.as_view()).is_err());
    }
}
