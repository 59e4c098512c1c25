//! Error types for convex hull computation and sliding-window analysis.

use trajan_motion::{ErrorKind, MotionError};

/// Errors from hull metrics and the sliding-window driver.
#[derive(Debug, thiserror::Error)]
pub enum HullError {
    /// Returned when fewer than `dim + 1` points are supplied.
    #[error("a {dim}-dimensional hull needs at least {required} points, got {n_points}")]
    TooFewPoints {
        /// Number of points supplied.
        n_points: usize,
        /// Dimension of the points.
        dim: usize,
        /// Minimum number of points, `dim + 1`.
        required: usize,
    },

    /// Returned when all points lie on a single line.
    #[error("points are collinear; hull has no interior")]
    Collinear,

    /// Returned when all points lie in a single plane (3-D only).
    #[error("points are coplanar; hull has no interior")]
    Coplanar,

    /// Returned when the hull dimension is not supported.
    #[error("convex hulls are supported in 2 and 3 dimensions, got {dim}")]
    UnsupportedDimension {
        /// Dimension of the points.
        dim: usize,
    },

    /// Returned when a sliding window of zero samples is requested.
    #[error("window size must be at least 1")]
    ZeroWindow,

    /// Wraps a trajectory validation error.
    #[error("trajectory error: {0}")]
    Motion(#[from] MotionError),
}

impl HullError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooFewPoints { .. } | Self::Collinear | Self::Coplanar => {
                ErrorKind::DegenerateGeometry
            }
            Self::UnsupportedDimension { .. } | Self::ZeroWindow => ErrorKind::InvalidInput,
            Self::Motion(e) => e.kind(),
        }
    }

    /// Return true if this error describes a hull with no interior.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.kind() == ErrorKind::DegenerateGeometry
    }
}
