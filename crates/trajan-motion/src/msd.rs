//! Mean squared displacement, as a single scalar and as a curve over time lags.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::describe::mean;
use crate::error::MotionError;
use crate::projection::radial;
use crate::trajectory::{TimedTrajectory, TrajectoryView};

/// Mean of the squared one-step change in radial distance from the origin.
///
/// With `r_i = |x_i|`, returns `mean((r_{i+1} - r_i)^2)`. A single scalar, not a curve.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`MotionError::TooShort`] | Fewer than two samples |
pub fn msd_direct(trajectory: TrajectoryView<'_>) -> Result<f64, MotionError> {
    let len = trajectory.len();
    if len < 2 {
        return Err(MotionError::TooShort { required: 2, len });
    }
    let r = radial(trajectory);
    let sq: Vec<f64> = r.windows(2).map(|w| (w[1] - w[0]).powi(2)).collect();
    Ok(mean(&sq))
}

/// One entry of a tau-indexed MSD curve.
///
/// `mean` and `std` are `NaN` when the shift leaves no aligned pairs; `std` alone
/// is `NaN` when exactly one pair remains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MsdPoint {
    /// The timestamp this entry was derived from.
    pub tau: f64,
    /// `floor(tau / time_step)`, the shift in samples.
    pub shift: usize,
    /// Mean squared displacement over all aligned pairs.
    pub mean: f64,
    /// Sample standard deviation (divide by `n - 1`) of the squared displacement.
    pub std: f64,
    /// Number of aligned pairs that contributed.
    pub n_pairs: usize,
}

impl MsdPoint {
    /// Return true if no pairs were available at this shift.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        self.n_pairs == 0
    }
}

/// MSD curve over every axis of the trajectory. See [`msd_by_tau_axes`].
///
/// # Errors
///
/// Same conditions as [`msd_by_tau_axes`].
pub fn msd_by_tau(trajectory: &TimedTrajectory, time_step: f64) -> Result<Vec<MsdPoint>, MotionError> {
    let axes: Vec<usize> = (0..trajectory.trajectory().dim()).collect();
    msd_by_tau_axes(trajectory, time_step, &axes)
}

/// MSD curve with one entry per sample, restricted to the given axes.
///
/// Sample `i` with timestamp `t_i` maps to the shift `s = floor(t_i / time_step)`.
/// The trajectory is aligned against itself shifted by `s` samples, and the squared
/// displacement `sum over axes of (x_j[a] - x_{j+s}[a])^2` is taken for every
/// `j < n - s`. Shift `0` compares each sample with itself and is reported as
/// `mean = 0`, `std = 0`.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`MotionError::InvalidTimeStep`] | `time_step` is not positive and finite |
/// | [`MotionError::NegativeTime`] | A timestamp is below zero |
/// | [`MotionError::NoAxes`] | `axes` is empty |
/// | [`MotionError::AxisOutOfRange`] | An axis exceeds the trajectory dimension |
#[instrument(skip(trajectory, axes), fields(n = trajectory.len(), n_axes = axes.len()))]
pub fn msd_by_tau_axes(
    trajectory: &TimedTrajectory,
    time_step: f64,
    axes: &[usize],
) -> Result<Vec<MsdPoint>, MotionError> {
    if !(time_step.is_finite() && time_step > 0.0) {
        return Err(MotionError::InvalidTimeStep { value: time_step });
    }
    if axes.is_empty() {
        return Err(MotionError::NoAxes);
    }
    let view = trajectory.trajectory().as_view();
    let dim = view.dim();
    if let Some(&axis) = axes.iter().find(|&&a| a >= dim) {
        return Err(MotionError::AxisOutOfRange { axis, dim });
    }
    if let Some((index, &value)) = trajectory.times().iter().enumerate().find(|(_, t)| **t < 0.0) {
        return Err(MotionError::NegativeTime { index, value });
    }

    let n = view.len();
    let mut out = Vec::with_capacity(n);
    // timestamps increase, so equal shifts arrive consecutively
    let mut cached: Option<(usize, f64, f64, usize)> = None;

    for &tau in trajectory.times() {
        // saturating float-to-int cast: huge shifts simply exceed `n`
        let shift = (tau / time_step).floor() as usize;
        let (mean, std, n_pairs) = match cached {
            Some((s, m, sd, np)) if s == shift => (m, sd, np),
            _ => {
                let stats = shifted_stats(view, axes, shift);
                cached = Some((shift, stats.0, stats.1, stats.2));
                stats
            }
        };
        out.push(MsdPoint {
            tau,
            shift,
            mean,
            std,
            n_pairs,
        });
    }

    let undefined = out.iter().filter(|p| p.is_undefined()).count();
    if undefined > 0 {
        debug!(undefined, "shifts beyond trajectory length reported as NaN");
    }
    Ok(out)
}

/// Mean, sample std and pair count of squared displacement at one shift.
fn shifted_stats(view: TrajectoryView<'_>, axes: &[usize], shift: usize) -> (f64, f64, usize) {
    let n = view.len();
    if shift == 0 {
        return (0.0, 0.0, n);
    }
    if shift >= n {
        return (f64::NAN, f64::NAN, 0);
    }
    let sq: Vec<f64> = (0..n - shift)
        .map(|j| {
            let a = view.point(j);
            let b = view.point(j + shift);
            axes.iter().map(|&ax| (a[ax] - b[ax]).powi(2)).sum()
        })
        .collect();
    let m = mean(&sq);
    let std = if sq.len() < 2 {
        f64::NAN
    } else {
        (sq.iter().map(|&v| (v - m).powi(2)).sum::<f64>() / (sq.len() - 1) as f64).sqrt()
    };
    (m, std, sq.len())
}
