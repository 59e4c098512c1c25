//! Centre of mass and radius of gyration.

use crate::error::MotionError;
use crate::jump::squared_euclidean;
use crate::trajectory::TrajectoryView;

/// Mean position of the trajectory, optionally weighted by per-sample mass.
///
/// Samples with zero weight do not contribute to the centre.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`MotionError::LengthMismatch`] | `weights.len() != trajectory.len()` |
/// | [`MotionError::InvalidWeight`] | A weight is negative or non-finite |
/// | [`MotionError::ZeroTotalMass`] | All weights are zero |
pub fn center_of_mass(
    trajectory: TrajectoryView<'_>,
    weights: Option<&[f64]>,
) -> Result<Vec<f64>, MotionError> {
    let dim = trajectory.dim();
    let mut center = vec![0.0; dim];

    let Some(weights) = weights else {
        for p in trajectory.points() {
            for (c, v) in center.iter_mut().zip(p) {
                *c += v;
            }
        }
        let n = trajectory.len() as f64;
        center.iter_mut().for_each(|c| *c /= n);
        return Ok(center);
    };

    if weights.len() != trajectory.len() {
        return Err(MotionError::LengthMismatch {
            expected: trajectory.len(),
            got: weights.len(),
        });
    }
    if let Some((index, &value)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        return Err(MotionError::InvalidWeight { index, value });
    }
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(MotionError::ZeroTotalMass);
    }
    for (p, &w) in trajectory.points().zip(weights) {
        if w == 0.0 {
            continue;
        }
        for (c, v) in center.iter_mut().zip(p) {
            *c += w * v;
        }
    }
    center.iter_mut().for_each(|c| *c /= total);
    Ok(center)
}

/// Root-mean-square distance of all samples from their centre of mass.
///
/// Every sample contributes to the distance average, including zero-weight ones;
/// weights only move the centre.
///
/// # Errors
///
/// Same conditions as [`center_of_mass`].
pub fn radius_of_gyration(
    trajectory: TrajectoryView<'_>,
    weights: Option<&[f64]>,
) -> Result<f64, MotionError> {
    let center = center_of_mass(trajectory, weights)?;
    radius_of_gyration_about(trajectory, &center)
}

/// Root-mean-square distance of all samples from a given centre.
///
/// # Errors
///
/// Returns [`MotionError::DimensionMismatch`] if `center` does not match the
/// trajectory dimension.
pub fn radius_of_gyration_about(
    trajectory: TrajectoryView<'_>,
    center: &[f64],
) -> Result<f64, MotionError> {
    check_center(trajectory, center)?;
    let sum: f64 = trajectory
        .points()
        .map(|p| squared_euclidean(p, center))
        .sum();
    Ok((sum / trajectory.len() as f64).sqrt())
}

/// Radius of gyration of every prefix, about the global centre of mass.
///
/// The result has `n + 1` entries indexed by prefix length: entry `i` is
/// `sqrt(S_i / i)` where `S_i` sums the squared distances of the first `i` samples.
/// Entry `0` covers the empty prefix and is `NaN`. Entry `n` equals
/// [`radius_of_gyration`].
///
/// # Errors
///
/// Same conditions as [`center_of_mass`].
pub fn cumulative_gyration(
    trajectory: TrajectoryView<'_>,
    weights: Option<&[f64]>,
) -> Result<Vec<f64>, MotionError> {
    let center = center_of_mass(trajectory, weights)?;
    let mut out = Vec::with_capacity(trajectory.len() + 1);
    out.push(f64::NAN);
    let mut sum = 0.0;
    for (i, p) in trajectory.points().enumerate() {
        sum += squared_euclidean(p, &center);
        out.push((sum / (i + 1) as f64).sqrt());
    }
    Ok(out)
}

fn check_center(trajectory: TrajectoryView<'_>, center: &[f64]) -> Result<(), MotionError> {
    if center.len() != trajectory.dim() {
        return Err(MotionError::DimensionMismatch {
            expected: trajectory.dim(),
            got: center.len(),
        });
    }
    if let Some(index) = center.iter().position(|v| !v.is_finite()) {
        return Err(MotionError::NonFiniteValue { index });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::Trajectory;

    fn cross() -> Trajectory {
        Trajectory::from_rows(&[[1.0, 0.0], [-1.0, 0.0], [0.0, 1.0], [0.0, -1.0]]).unwrap()
    }

    #[test]
    fn symmetric_points_unit_radius() {
        let t = cross();
        assert_eq!(center_of_mass(t.as_view(), None).unwrap(), vec![0.0, 0.0]);
        assert!((radius_of_gyration(t.as_view(), None).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn weights_shift_center() {
        let t = Trajectory::from_rows(&[[0.0, 0.0], [4.0, 0.0]]).unwrap();
        let c = center_of_mass(t.as_view(), Some(&[3.0, 1.0])).unwrap();
        assert_eq!(c, vec![1.0, 0.0]);
    }

    #[test]
    fn zero_weight_excluded_from_center_not_distance() {
        let t = Trajectory::from_rows(&[[0.0, 0.0], [2.0, 0.0], [100.0, 0.0]]).unwrap();
        let w = [1.0, 1.0, 0.0];
        assert_eq!(center_of_mass(t.as_view(), Some(&w)).unwrap(), vec![1.0, 0.0]);
        // distances from (1,0): 1, 1, 99
        let rg = radius_of_gyration(t.as_view(), Some(&w)).unwrap();
        let expected = ((1.0 + 1.0 + 99.0_f64.powi(2)) / 3.0).sqrt();
        assert!((rg - expected).abs() < 1e-12);
    }

    #[test]
    fn weight_errors() {
        let t = cross();
        assert!(matches!(
            center_of_mass(t.as_view(), Some(&[1.0])),
            Err(MotionError::LengthMismatch { expected: 4, got: 1 })
        ));
        assert!(matches!(
            center_of_mass(t.as_view(), Some(&[1.0, -1.0, 1.0, 1.0])),
            Err(MotionError::InvalidWeight { index: 1, .. })
        ));
        let err = center_of_mass(t.as_view(), Some(&[0.0; 4])).unwrap_err();
        assert!(matches!(err, MotionError::ZeroTotalMass));
        assert_eq!(err.kind(), crate::ErrorKind::UndefinedStatistic);
    }

    #[test]
    fn about_rejects_wrong_dimension() {
        let t = cross();
        assert!(matches!(
            radius_of_gyration_about(t.as_view(), &[0.0]),
            Err(MotionError::DimensionMismatch { expected: 2, got: 1 })
        ));
    }

    #[test]
    fn cumulative_indexed_by_prefix_length() {
        let t = cross();
        let series = cumulative_gyration(t.as_view(), None).unwrap();
        assert_eq!(series.len(), 5);
        assert!(series[0].is_nan());
        for &v in &series[1..] {
            assert!((v - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn cumulative_last_matches_global() {
        let t = Trajectory::from_rows(&[[0.0, 0.0], [1.0, 3.0], [4.0, -2.0], [2.0, 2.0]]).unwrap();
        let series = cumulative_gyration(t.as_view(), None).unwrap();
        let global = radius_of_gyration(t.as_view(), None).unwrap();
        assert!((series[4] - global).abs() < 1e-12);
        // first prefix: distance of sample 0 from centre (1.75, 0.75)
        let d0 = (1.75_f64.powi(2) + 0.75_f64.powi(2)).sqrt();
        assert!((series[1] - d0).abs() < 1e-12);
    }
}
