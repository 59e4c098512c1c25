//! Trajectory types with validation guarantees.

use crate::error::MotionError;

/// Owned, validated trajectory stored as a contiguous row-major table.
///
/// Each row is one sample; each column one coordinate axis. Guaranteed to hold at
/// least one sample, a fixed dimension of at least one, and only finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    dim: usize,
    coords: Vec<f64>,
}

impl Trajectory {
    /// Create a trajectory from a flat row-major coordinate buffer.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MotionError::ZeroDimension`] | `dim` is zero |
    /// | [`MotionError::EmptyTrajectory`] | `coords` is empty |
    /// | [`MotionError::RaggedCoordinates`] | `coords.len()` is not a multiple of `dim` |
    /// | [`MotionError::NonFiniteValue`] | Any value is NaN or infinite |
    pub fn new(dim: usize, coords: Vec<f64>) -> Result<Self, MotionError> {
        validate(dim, &coords)?;
        Ok(Self { dim, coords })
    }

    /// Create a trajectory from fixed-size rows, e.g. `&[[x, y], ...]`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Trajectory::new`].
    pub fn from_rows<const D: usize>(rows: &[[f64; D]]) -> Result<Self, MotionError> {
        Self::new(D, rows.iter().flatten().copied().collect())
    }

    /// Create a trajectory from one slice per axis, e.g. `&[&x, &y]`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MotionError::LengthMismatch`] | Columns have different lengths |
    ///
    /// Plus every condition of [`Trajectory::new`].
    pub fn from_columns(columns: &[&[f64]]) -> Result<Self, MotionError> {
        let dim = columns.len();
        if dim == 0 {
            return Err(MotionError::ZeroDimension);
        }
        let len = columns[0].len();
        if let Some(bad) = columns.iter().find(|c| c.len() != len) {
            return Err(MotionError::LengthMismatch {
                expected: len,
                got: bad.len(),
            });
        }
        let mut coords = Vec::with_capacity(len * dim);
        for i in 0..len {
            coords.extend(columns.iter().map(|c| c[i]));
        }
        Self::new(dim, coords)
    }

    /// Borrow this trajectory as a zero-copy view.
    #[must_use]
    pub fn as_view(&self) -> TrajectoryView<'_> {
        TrajectoryView::new_unchecked(self.dim, &self.coords)
    }

    /// Return the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len() / self.dim
    }

    /// Return true if the trajectory has no samples.
    ///
    /// Always `false` for a trajectory built through [`Trajectory::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Return the number of coordinate axes.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Return a copy of this trajectory with its samples in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let coords = self
            .coords
            .chunks_exact(self.dim)
            .rev()
            .flatten()
            .copied()
            .collect();
        Self {
            dim: self.dim,
            coords,
        }
    }

    /// Consume and return the flat row-major buffer.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.coords
    }
}

impl TryFrom<Vec<[f64; 2]>> for Trajectory {
    type Error = MotionError;

    fn try_from(rows: Vec<[f64; 2]>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

/// Borrowed, validated view into a trajectory. Zero-copy reference.
#[derive(Debug, Clone, Copy)]
pub struct TrajectoryView<'a> {
    dim: usize,
    coords: &'a [f64],
}

impl<'a> TrajectoryView<'a> {
    /// Create a new view over a flat row-major buffer, validating it.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Trajectory::new`].
    pub fn new(dim: usize, coords: &'a [f64]) -> Result<Self, MotionError> {
        validate(dim, coords)?;
        Ok(Self { dim, coords })
    }

    /// Create a view without validation. For internal use where data is already validated.
    pub(crate) fn new_unchecked(dim: usize, coords: &'a [f64]) -> Self {
        Self { dim, coords }
    }

    /// Return the flat row-major coordinate buffer.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.coords
    }

    /// Return the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len() / self.dim
    }

    /// Return true if the view has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Return the number of coordinate axes.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Return the coordinates of sample `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[must_use]
    pub fn point(&self, i: usize) -> &'a [f64] {
        &self.coords[i * self.dim..(i + 1) * self.dim]
    }

    /// Iterate over samples in temporal order.
    pub fn points(&self) -> std::slice::ChunksExact<'a, f64> {
        self.coords.chunks_exact(self.dim)
    }

    /// Return the contiguous window of `len` samples starting at `start`, or
    /// `None` if it would run past the end or `len` is zero.
    #[must_use]
    pub fn window(&self, start: usize, len: usize) -> Option<TrajectoryView<'a>> {
        if len == 0 || start.checked_add(len)? > self.len() {
            return None;
        }
        let coords = &self.coords[start * self.dim..(start + len) * self.dim];
        Some(Self::new_unchecked(self.dim, coords))
    }

    /// Return the values of a single coordinate axis.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::AxisOutOfRange`] if `axis >= self.dim()`.
    pub fn axis(&self, axis: usize) -> Result<Vec<f64>, MotionError> {
        if axis >= self.dim {
            return Err(MotionError::AxisOutOfRange {
                axis,
                dim: self.dim,
            });
        }
        Ok(self.points().map(|p| p[axis]).collect())
    }

    /// Copy this view into an owned [`Trajectory`].
    #[must_use]
    pub fn to_owned(&self) -> Trajectory {
        Trajectory {
            dim: self.dim,
            coords: self.coords.to_vec(),
        }
    }
}

/// A trajectory whose samples each carry a timestamp.
///
/// Timestamps are finite and strictly increasing, one per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedTrajectory {
    times: Vec<f64>,
    trajectory: Trajectory,
}

impl TimedTrajectory {
    /// Pair a trajectory with its timestamps.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`MotionError::LengthMismatch`] | `times.len() != trajectory.len()` |
    /// | [`MotionError::NonFiniteValue`] | A timestamp is NaN or infinite |
    /// | [`MotionError::NonIncreasingTime`] | Timestamps repeat or go backwards |
    pub fn new(times: Vec<f64>, trajectory: Trajectory) -> Result<Self, MotionError> {
        if times.len() != trajectory.len() {
            return Err(MotionError::LengthMismatch {
                expected: trajectory.len(),
                got: times.len(),
            });
        }
        if let Some(index) = times.iter().position(|t| !t.is_finite()) {
            return Err(MotionError::NonFiniteValue { index });
        }
        if let Some(i) = times.windows(2).position(|w| w[1] <= w[0]) {
            return Err(MotionError::NonIncreasingTime {
                index: i + 1,
                previous: times[i],
                current: times[i + 1],
            });
        }
        Ok(Self { times, trajectory })
    }

    /// Return the timestamps.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Return the underlying trajectory.
    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Return the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Return true if there are no samples. Always `false` for valid instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

fn validate(dim: usize, coords: &[f64]) -> Result<(), MotionError> {
    if dim == 0 {
        return Err(MotionError::ZeroDimension);
    }
    if coords.is_empty() {
        return Err(MotionError::EmptyTrajectory);
    }
    if coords.len() % dim != 0 {
        return Err(MotionError::RaggedCoordinates {
            len: coords.len(),
            dim,
        });
    }
    if let Some(index) = coords.iter().position(|v| !v.is_finite()) {
        return Err(MotionError::NonFiniteValue { index });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        let result = Trajectory::new(2, vec![]);
        assert!(matches!(result, Err(MotionError::EmptyTrajectory)));
    }

    #[test]
    fn rejects_zero_dim() {
        let result = Trajectory::new(0, vec![1.0]);
        assert!(matches!(result, Err(MotionError::ZeroDimension)));
    }

    #[test]
    fn rejects_ragged() {
        let result = Trajectory::new(2, vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(MotionError::RaggedCoordinates { len: 3, dim: 2 })
        ));
    }

    #[test]
    fn rejects_nan() {
        let result = Trajectory::from_rows(&[[0.0, 1.0], [f64::NAN, 2.0]]);
        assert!(matches!(result, Err(MotionError::NonFiniteValue { index: 2 })));
    }

    #[test]
    fn from_columns_interleaves() {
        let x = [1.0, 2.0, 3.0];
        let y = [10.0, 20.0, 30.0];
        let t = Trajectory::from_columns(&[&x, &y]).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.dim(), 2);
        assert_eq!(t.as_view().point(1), &[2.0, 20.0]);
    }

    #[test]
    fn from_columns_length_mismatch() {
        let x = [1.0, 2.0, 3.0];
        let y = [10.0, 20.0];
        let result = Trajectory::from_columns(&[&x, &y]);
        assert!(matches!(
            result,
            Err(MotionError::LengthMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn window_bounds() {
        let t = Trajectory::from_rows(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]).unwrap();
        let v = t.as_view();
        let w = v.window(1, 2).unwrap();
        assert_eq!(w.len(), 2);
        assert_eq!(w.point(0), &[1.0, 0.0]);
        assert_eq!(w.point(1), &[2.0, 0.0]);
        assert!(v.window(3, 2).is_none());
        assert!(v.window(0, 0).is_none());
        assert!(v.window(usize::MAX, 2).is_none());
    }

    #[test]
    fn reversed_order() {
        let t = Trajectory::from_rows(&[[0.0, 1.0], [2.0, 3.0]]).unwrap();
        assert_eq!(t.reversed().into_inner(), vec![2.0, 3.0, 0.0, 1.0]);
    }

    #[test]
    fn axis_out_of_range() {
        let t = Trajectory::from_rows(&[[0.0, 1.0]]).unwrap();
        assert!(matches!(
            t.as_view().axis(2),
            Err(MotionError::AxisOutOfRange { axis: 2, dim: 2 })
        ));
        assert_eq!(t.as_view().axis(1).unwrap(), vec![1.0]);
    }

    #[test]
    fn timed_rejects_duplicate_timestamps() {
        let t = Trajectory::from_rows(&[[0.0], [1.0], [2.0]]).unwrap();
        let result = TimedTrajectory::new(vec![0.0, 1.0, 1.0], t);
        assert!(matches!(
            result,
            Err(MotionError::NonIncreasingTime { index: 2, .. })
        ));
    }

    #[test]
    fn timed_rejects_length_mismatch() {
        let t = Trajectory::from_rows(&[[0.0], [1.0]]).unwrap();
        let result = TimedTrajectory::new(vec![0.0], t);
        assert!(matches!(
            result,
            Err(MotionError::LengthMismatch { expected: 2, got: 1 })
        ));
    }
}
