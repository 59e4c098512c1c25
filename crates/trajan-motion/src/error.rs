//! Error types for trajectory construction and statistics.

use std::fmt;

/// Coarse classification of a failure, shared by every crate in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or insufficient data for the requested statistic.
    InvalidInput,
    /// Points handed to a hull computation are collinear, coplanar or too few.
    DegenerateGeometry,
    /// An intermediate value is numerically undefined.
    UndefinedStatistic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidInput => "invalid input",
            Self::DegenerateGeometry => "degenerate geometry",
            Self::UndefinedStatistic => "undefined statistic",
        };
        f.write_str(name)
    }
}

/// Errors from trajectory validation and motion statistics.
#[derive(Debug, thiserror::Error)]
pub enum MotionError {
    /// Returned when a trajectory or series has no samples.
    #[error("trajectory must contain at least one sample")]
    EmptyTrajectory,

    /// Returned when a trajectory is declared with zero coordinate axes.
    #[error("trajectory dimension must be at least 1")]
    ZeroDimension,

    /// Returned when the flat coordinate buffer is not a whole number of rows.
    #[error("{len} coordinate values do not split into rows of {dim}")]
    RaggedCoordinates {
        /// Number of coordinate values supplied.
        len: usize,
        /// Declared dimension.
        dim: usize,
    },

    /// Returned when an input value is NaN or infinite.
    #[error("non-finite value at index {index}")]
    NonFiniteValue {
        /// Flat position of the first non-finite value.
        index: usize,
    },

    /// Returned when two parallel sequences disagree in length.
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Length dictated by the trajectory.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },

    /// Returned when timestamps are not strictly increasing.
    #[error("timestamp at index {index} does not increase ({previous} -> {current})")]
    NonIncreasingTime {
        /// Index of the offending timestamp.
        index: usize,
        /// Timestamp before it.
        previous: f64,
        /// The offending timestamp.
        current: f64,
    },

    /// Returned when a timestamp is negative and cannot be mapped to a shift.
    #[error("timestamp at index {index} is negative ({value})")]
    NegativeTime {
        /// Index of the offending timestamp.
        index: usize,
        /// The offending timestamp.
        value: f64,
    },

    /// Returned when the MSD time step is zero, negative or non-finite.
    #[error("time step must be positive and finite, got {value}")]
    InvalidTimeStep {
        /// The rejected time step.
        value: f64,
    },

    /// Returned when a lag set is empty, unordered or contains zero.
    #[error("lags must be positive and strictly increasing: {reason}")]
    InvalidLagSet {
        /// What was wrong with the lag set.
        reason: &'static str,
    },

    /// Returned when a lag leaves no pairs in a series of the given length.
    #[error("lag {lag} requires a series longer than {len} samples")]
    InvalidLag {
        /// The lag that cannot be evaluated.
        lag: usize,
        /// Length of the series.
        len: usize,
    },

    /// Returned when a regression has fewer than two points.
    #[error("need at least 2 lags for a log-log fit, got {n}")]
    TooFewLags {
        /// Number of lags available.
        n: usize,
    },

    /// Returned when the increments at some lag have zero variance.
    #[error("increments at lag {lag} have zero variance (constant series?)")]
    ZeroVariance {
        /// The lag at which the variance vanished.
        lag: usize,
    },

    /// Returned when a statistic needs more samples than were supplied.
    #[error("need at least {required} samples, got {len}")]
    TooShort {
        /// Minimum number of samples.
        required: usize,
        /// Number of samples supplied.
        len: usize,
    },

    /// Returned when an axis index does not exist in the trajectory.
    #[error("axis {axis} out of range for a {dim}-dimensional trajectory")]
    AxisOutOfRange {
        /// Requested axis.
        axis: usize,
        /// Trajectory dimension.
        dim: usize,
    },

    /// Returned when a point or centre has the wrong number of coordinates.
    #[error("expected {expected} coordinates, got {got}")]
    DimensionMismatch {
        /// Trajectory dimension.
        expected: usize,
        /// Number of coordinates supplied.
        got: usize,
    },

    /// Returned when a statistic is asked to use no coordinate axes at all.
    #[error("at least one coordinate axis must be selected")]
    NoAxes,

    /// Returned when a mass weight is negative or non-finite.
    #[error("invalid mass weight {value} at index {index}")]
    InvalidWeight {
        /// Index of the offending weight.
        index: usize,
        /// The offending weight.
        value: f64,
    },

    /// Returned when every mass weight is zero.
    #[error("total mass is zero; centre of mass is undefined")]
    ZeroTotalMass,

    /// Returned when an upsampling factor of zero is requested.
    #[error("upsampling factor must be at least 1")]
    ZeroFactor,
}

impl MotionError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroTotalMass => ErrorKind::UndefinedStatistic,
            _ => ErrorKind::InvalidInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_mass_is_undefined_statistic() {
        assert_eq!(MotionError::ZeroTotalMass.kind(), ErrorKind::UndefinedStatistic);
    }

    #[test]
    fn zero_variance_is_invalid_input() {
        assert_eq!(MotionError::ZeroVariance { lag: 2 }.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn display_mentions_index() {
        let e = MotionError::NonFiniteValue { index: 7 };
        assert_eq!(e.to_string(), "non-finite value at index 7");
    }
}
