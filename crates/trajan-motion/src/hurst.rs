//! Hurst exponent estimation by log-log regression of increment variance on lag.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::describe::population_variance;
use crate::error::MotionError;
use crate::lags::LagSet;
use crate::projection::Projection;
use crate::trajectory::TrajectoryView;

/// Increment variance observed at a single lag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagVariance {
    /// The lag `k`.
    pub lag: usize,
    /// Population variance of `p[k..] - p[..n-k]`.
    pub variance: f64,
}

/// Result of a Hurst exponent fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HurstEstimate {
    /// Estimated Hurst exponent, `slope / 2`.
    pub exponent: f64,
    /// Slope of `log10(variance)` against `log10(lag)`.
    pub slope: f64,
    /// Intercept of the same fit.
    pub intercept: f64,
    /// Per-lag variances, in lag order.
    pub variances: Vec<LagVariance>,
}

/// Estimate the Hurst exponent of a scalar series.
///
/// For every lag `k` the series is differenced against itself shifted by `k`, the
/// population variance of those increments is taken, and an ordinary least-squares
/// line is fitted through `(log10 k, log10 var(k))`. Since `Var(τ) ∝ τ^(2H)`, the
/// exponent is half the slope.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`MotionError::EmptyTrajectory`] | `series` is empty |
/// | [`MotionError::NonFiniteValue`] | `series` contains NaN or infinity |
/// | [`MotionError::TooFewLags`] | `lags` has fewer than two entries |
/// | [`MotionError::InvalidLag`] | A lag is `>= series.len()` |
/// | [`MotionError::ZeroVariance`] | Increments at some lag are constant |
#[instrument(skip(series, lags), fields(n = series.len(), n_lags = lags.len()))]
pub fn estimate_hurst(series: &[f64], lags: &LagSet) -> Result<HurstEstimate, MotionError> {
    if series.is_empty() {
        return Err(MotionError::EmptyTrajectory);
    }
    if let Some(index) = series.iter().position(|v| !v.is_finite()) {
        return Err(MotionError::NonFiniteValue { index });
    }
    if lags.len() < 2 {
        return Err(MotionError::TooFewLags { n: lags.len() });
    }
    let n = series.len();
    if lags.max() >= n {
        return Err(MotionError::InvalidLag {
            lag: lags.max(),
            len: n,
        });
    }

    let mut variances = Vec::with_capacity(lags.len());
    let mut increments = Vec::with_capacity(n);
    for &lag in lags {
        increments.clear();
        increments.extend(series[lag..].iter().zip(series).map(|(hi, lo)| hi - lo));
        let variance = population_variance(&increments);
        if variance <= 0.0 {
            return Err(MotionError::ZeroVariance { lag });
        }
        variances.push(LagVariance { lag, variance });
    }

    let xs: Vec<f64> = variances.iter().map(|v| (v.lag as f64).log10()).collect();
    let ys: Vec<f64> = variances.iter().map(|v| v.variance.log10()).collect();
    let (slope, intercept) = least_squares(&xs, &ys);
    let exponent = slope / 2.0;
    debug!(exponent, slope, "hurst fit");

    Ok(HurstEstimate {
        exponent,
        slope,
        intercept,
        variances,
    })
}

/// Unweighted first-degree least squares. `xs` must hold at least two distinct values.
fn least_squares(xs: &[f64], ys: &[f64]) -> (f64, f64) {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;
    let (sxy, sxx) = xs
        .iter()
        .zip(ys)
        .fold((0.0, 0.0), |(sxy, sxx), (&x, &y)| {
            let dx = x - mean_x;
            (sxy + dx * (y - mean_y), sxx + dx * dx)
        });
    let slope = sxy / sxx;
    (slope, mean_y - slope * mean_x)
}

/// Hurst estimation applied to a multi-dimensional trajectory.
///
/// # Defaults
///
/// | Parameter    | Default                  |
/// |--------------|--------------------------|
/// | `lags`       | `2..100` (via `Default`) |
/// | `projection` | [`Projection::Radial`]   |
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HurstConfig {
    lags: LagSet,
    projection: Projection,
}

impl HurstConfig {
    /// Create a configuration over the given lags.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::TooFewLags`] if `lags` cannot support a regression.
    pub fn new(lags: LagSet) -> Result<Self, MotionError> {
        if lags.len() < 2 {
            return Err(MotionError::TooFewLags { n: lags.len() });
        }
        Ok(Self {
            lags,
            projection: Projection::default(),
        })
    }

    /// Set how the trajectory is reduced to a scalar series.
    #[must_use]
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Return the lag set.
    #[must_use]
    pub fn lags(&self) -> &LagSet {
        &self.lags
    }

    /// Return the projection.
    #[must_use]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Project `trajectory` and estimate its Hurst exponent.
    ///
    /// # Errors
    ///
    /// [`MotionError::AxisOutOfRange`] from the projection, plus every condition
    /// of [`estimate_hurst`].
    pub fn fit(&self, trajectory: TrajectoryView<'_>) -> Result<HurstEstimate, MotionError> {
        let series = self.projection.apply(trajectory)?;
        estimate_hurst(&series, &self.lags)
    }
}
