//! Hull metrics for a single point set.

use serde::{Deserialize, Serialize};
use trajan_motion::TrajectoryView;

use crate::error::HullError;
use crate::planar::planar_hull;
use crate::spatial::spatial_hull;

/// Relative tolerance below which a hull is considered to have no interior.
///
/// Compared against the hull measure divided by the matching power of the largest
/// coordinate extent of the points.
pub const DEGENERACY_EPS: f64 = 1e-10;

/// Measures of a convex hull.
///
/// `volume` is the `D`-dimensional measure (area in 2-D) and `area` the
/// `(D-1)`-dimensional boundary measure (perimeter in 2-D).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HullMetrics {
    /// Enclosed measure.
    pub volume: f64,
    /// Boundary measure.
    pub area: f64,
}

impl HullMetrics {
    /// Sentinel recorded for windows whose hull is degenerate.
    pub const UNDEFINED: Self = Self {
        volume: f64::NAN,
        area: f64::NAN,
    };

    /// Return true if this is the degenerate-window sentinel.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        self.volume.is_nan()
    }
}

/// Compute the convex hull of the samples of `points` and return its measures.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`HullError::UnsupportedDimension`] | Dimension is not 2 or 3 |
/// | [`HullError::TooFewPoints`] | Fewer than `D + 1` samples |
/// | [`HullError::Collinear`] | All samples lie on one line |
/// | [`HullError::Coplanar`] | All samples lie in one plane (3-D) |
pub fn hull_metrics(points: TrajectoryView<'_>) -> Result<HullMetrics, HullError> {
    let dim = points.dim();
    check_dimension(dim)?;
    let n_points = points.len();
    if n_points < dim + 1 {
        return Err(HullError::TooFewPoints {
            n_points,
            dim,
            required: dim + 1,
        });
    }
    match dim {
        2 => {
            let pts: Vec<[f64; 2]> = points.points().map(|p| [p[0], p[1]]).collect();
            planar_hull(&pts)
        }
        _ => {
            let pts: Vec<[f64; 3]> = points.points().map(|p| [p[0], p[1], p[2]]).collect();
            spatial_hull(&pts)
        }
    }
}

pub(crate) fn check_dimension(dim: usize) -> Result<(), HullError> {
    if matches!(dim, 2 | 3) {
        Ok(())
    } else {
        Err(HullError::UnsupportedDimension { dim })
    }
}

#[cfg(test)]
mod tests {
    use trajan_motion::Trajectory;

    use super::*;

    #[test]
    fn square_area_one() {
        let t = Trajectory::from_rows(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).unwrap();
        let m = hull_metrics(t.as_view()).unwrap();
        assert!((m.volume - 1.0).abs() < 1e-12);
        assert!((m.area - 4.0).abs() < 1e-12);
    }

    #[test]
    fn too_few_points() {
        let t = Trajectory::from_rows(&[[0.0, 0.0], [1.0, 0.0]]).unwrap();
        assert!(matches!(
            hull_metrics(t.as_view()),
            Err(HullError::TooFewPoints {
                n_points: 2,
                dim: 2,
                required: 3
            })
        ));
        let t = Trajectory::from_rows(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]).unwrap();
        assert!(matches!(
            hull_metrics(t.as_view()),
            Err(HullError::TooFewPoints { required: 4, .. })
        ));
    }

    #[test]
    fn unsupported_dimension() {
        let t = Trajectory::new(1, vec![0.0, 1.0, 2.0]).unwrap();
        assert!(matches!(
            hull_metrics(t.as_view()),
            Err(HullError::UnsupportedDimension { dim: 1 })
        ));
        let t = Trajectory::new(4, vec![0.0; 20]).unwrap();
        assert!(matches!(
            hull_metrics(t.as_view()),
            Err(HullError::UnsupportedDimension { dim: 4 })
        ));
    }

    #[test]
    fn three_dimensional_dispatch() {
        let t = Trajectory::from_rows(&[
            [0.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [0.0, 2.0, 0.0],
            [0.0, 0.0, 2.0],
        ])
        .unwrap();
        let m = hull_metrics(t.as_view()).unwrap();
        assert!((m.volume - 8.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn sentinel_is_undefined() {
        assert!(HullMetrics::UNDEFINED.is_undefined());
        assert!(!HullMetrics { volume: 1.0, area: 4.0 }.is_undefined());
    }
}
