//! Result types for sliding-window hull analysis.

use serde::{Deserialize, Serialize};

use crate::metrics::HullMetrics;

/// Hull measures of one window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowHull {
    /// Index of the first trajectory sample in the window.
    pub start: usize,
    /// Hull measures, or [`HullMetrics::UNDEFINED`] for a degenerate window.
    pub metrics: HullMetrics,
}

impl WindowHull {
    /// Return true if this window's points had no interior.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.metrics.is_undefined()
    }
}

/// Hull measures of every window, ordered by window start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlidingHullResult {
    /// Number of samples per window.
    pub window_size: usize,
    /// One entry per window; entry `i` covers samples `i..i + window_size`.
    pub windows: Vec<WindowHull>,
}

impl SlidingHullResult {
    /// Return the enclosed measure of each window, `NaN` where degenerate.
    #[must_use]
    pub fn volumes(&self) -> Vec<f64> {
        self.windows.iter().map(|w| w.metrics.volume).collect()
    }

    /// Return the boundary measure of each window, `NaN` where degenerate.
    #[must_use]
    pub fn areas(&self) -> Vec<f64> {
        self.windows.iter().map(|w| w.metrics.area).collect()
    }

    /// Return the number of degenerate windows.
    #[must_use]
    pub fn n_degenerate(&self) -> usize {
        self.windows.iter().filter(|w| w.is_degenerate()).count()
    }

    /// Return the number of windows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Return true if the trajectory was shorter than one window.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: usize, volume: f64) -> WindowHull {
        WindowHull {
            start,
            metrics: HullMetrics { volume, area: volume * 4.0 },
        }
    }

    #[test]
    fn accessors() {
        let result = SlidingHullResult {
            window_size: 3,
            windows: vec![
                window(0, 1.0),
                WindowHull {
                    start: 1,
                    metrics: HullMetrics::UNDEFINED,
                },
                window(2, 2.0),
            ],
        };
        assert_eq!(result.len(), 3);
        assert_eq!(result.n_degenerate(), 1);
        let v = result.volumes();
        assert_eq!(v[0], 1.0);
        assert!(v[1].is_nan());
        assert_eq!(result.areas()[2], 8.0);
    }

    #[test]
    fn serializes_to_json() {
        let result = SlidingHullResult {
            window_size: 3,
            windows: vec![window(0, 1.0)],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["window_size"], 3);
        assert_eq!(json["windows"][0]["metrics"]["volume"], 1.0);
    }
}
