//! Configuration and driver for sliding-window hull analysis.

use rayon::prelude::*;
use tracing::{debug, instrument, warn};
use trajan_motion::TrajectoryView;

use crate::error::HullError;
use crate::metrics::{HullMetrics, check_dimension, hull_metrics};
use crate::result::{SlidingHullResult, WindowHull};

/// Configuration for sliding-window convex hull analysis.
///
/// Windows advance by one sample, so a trajectory of `n` samples yields
/// `max(0, n - window_size + 1)` windows.
///
/// # Defaults
///
/// | Parameter  | Default |
/// |------------|---------|
/// | `parallel` | `true`  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingHullConfig {
    window_size: usize,
    parallel: bool,
}

impl SlidingHullConfig {
    /// Create a configuration with the given window length in samples.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`HullError::ZeroWindow`] | `window_size` is zero |
    pub fn new(window_size: usize) -> Result<Self, HullError> {
        if window_size == 0 {
            return Err(HullError::ZeroWindow);
        }
        Ok(Self {
            window_size,
            parallel: true,
        })
    }

    /// Compute windows across the rayon thread pool (`true`) or sequentially.
    ///
    /// Output order is by window start either way.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Return the window length in samples.
    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Return whether windows are computed in parallel.
    #[must_use]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Return the number of windows a trajectory of `n` samples produces.
    #[must_use]
    pub fn n_windows(&self, n: usize) -> usize {
        (n + 1).saturating_sub(self.window_size)
    }

    /// Compute hull measures of every window of `trajectory`.
    ///
    /// A degenerate window (too few distinct points, collinear or coplanar) is
    /// recorded as [`HullMetrics::UNDEFINED`] and does not stop the analysis.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`HullError::UnsupportedDimension`] | Trajectory dimension is not 2 or 3 |
    #[instrument(skip(self, trajectory), fields(n = trajectory.len(), window_size = self.window_size))]
    pub fn fit(&self, trajectory: TrajectoryView<'_>) -> Result<SlidingHullResult, HullError> {
        check_dimension(trajectory.dim())?;
        let n_windows = self.n_windows(trajectory.len());

        let windows: Vec<WindowHull> = if self.parallel {
            (0..n_windows)
                .into_par_iter()
                .map(|start| self.window_hull(trajectory, start))
                .collect::<Result<_, _>>()?
        } else {
            (0..n_windows)
                .map(|start| self.window_hull(trajectory, start))
                .collect::<Result<_, _>>()?
        };

        let result = SlidingHullResult {
            window_size: self.window_size,
            windows,
        };
        let n_degenerate = result.n_degenerate();
        if n_windows > 0 && n_degenerate == n_windows {
            warn!(n_windows, "every window is degenerate");
        } else {
            debug!(n_windows, n_degenerate, "sliding hull complete");
        }
        Ok(result)
    }

    fn window_hull(&self, trajectory: TrajectoryView<'_>, start: usize) -> Result<WindowHull, HullError> {
        let metrics = match trajectory.window(start, self.window_size) {
            Some(window) => match hull_metrics(window) {
                Ok(m) => m,
                Err(e) if e.is_degenerate() => HullMetrics::UNDEFINED,
                Err(e) => return Err(e),
            },
            // start ranges over n_windows, so every window fits
            None => HullMetrics::UNDEFINED,
        };
        Ok(WindowHull { start, metrics })
    }
}

/// Compute the per-window hull series of `trajectory` with default settings.
///
/// Shorthand for `SlidingHullConfig::new(window_size)?.fit(trajectory)`.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`HullError::ZeroWindow`] | `window_size` is zero |
/// | [`HullError::UnsupportedDimension`] | Trajectory dimension is not 2 or 3 |
pub fn sliding_hull(
    trajectory: TrajectoryView<'_>,
    window_size: usize,
) -> Result<SlidingHullResult, HullError> {
    SlidingHullConfig::new(window_size)?.fit(trajectory)
}
