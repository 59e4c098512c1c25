//! Lag sets for increment statistics.

use serde::{Deserialize, Serialize};

use crate::error::MotionError;

/// Non-empty, strictly increasing sequence of positive integer lags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct LagSet(Vec<usize>);

impl LagSet {
    /// Create a lag set from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::InvalidLagSet`] if `lags` is empty, contains zero, or
    /// is not strictly increasing.
    pub fn new(lags: Vec<usize>) -> Result<Self, MotionError> {
        if lags.is_empty() {
            return Err(MotionError::InvalidLagSet { reason: "empty" });
        }
        if lags[0] == 0 {
            return Err(MotionError::InvalidLagSet {
                reason: "contains zero",
            });
        }
        if lags.windows(2).any(|w| w[1] <= w[0]) {
            return Err(MotionError::InvalidLagSet {
                reason: "not strictly increasing",
            });
        }
        Ok(Self(lags))
    }

    /// Create the half-open range `start..end`.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::InvalidLagSet`] if the range is empty or starts at zero.
    pub fn range(start: usize, end: usize) -> Result<Self, MotionError> {
        Self::new((start..end).collect())
    }

    /// Return the lags as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Return the number of lags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a valid lag set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the largest lag.
    #[must_use]
    pub fn max(&self) -> usize {
        // non-empty by construction
        self.0[self.0.len() - 1]
    }
}

impl Default for LagSet {
    /// Lags `2..100`.
    fn default() -> Self {
        Self((2..100).collect())
    }
}

impl TryFrom<Vec<usize>> for LagSet {
    type Error = MotionError;

    fn try_from(lags: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(lags)
    }
}

impl From<LagSet> for Vec<usize> {
    fn from(lags: LagSet) -> Self {
        lags.0
    }
}

impl<'a> IntoIterator for &'a LagSet {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            LagSet::new(vec![]),
            Err(MotionError::InvalidLagSet { .. })
        ));
    }

    #[test]
    fn rejects_zero() {
        assert!(matches!(
            LagSet::new(vec![0, 1]),
            Err(MotionError::InvalidLagSet { .. })
        ));
    }

    #[test]
    fn rejects_unordered() {
        assert!(matches!(
            LagSet::new(vec![3, 2]),
            Err(MotionError::InvalidLagSet { .. })
        ));
        assert!(matches!(
            LagSet::new(vec![2, 2]),
            Err(MotionError::InvalidLagSet { .. })
        ));
    }

    #[test]
    fn range_is_half_open() {
        let lags = LagSet::range(2, 5).unwrap();
        assert_eq!(lags.as_slice(), &[2, 3, 4]);
        assert_eq!(lags.max(), 4);
    }

    #[test]
    fn deserialization_validates() {
        let lags: LagSet = serde_json::from_str("[2, 4, 8]").unwrap();
        assert_eq!(lags.as_slice(), &[2, 4, 8]);
        assert!(serde_json::from_str::<LagSet>("[]").is_err());
        assert!(serde_json::from_str::<LagSet>("[4, 2]").is_err());
    }

    #[test]
    fn default_range() {
        let lags = LagSet::default();
        assert_eq!(lags.len(), 98);
        assert_eq!(lags.as_slice()[0], 2);
        assert_eq!(lags.max(), 99);
    }
}
