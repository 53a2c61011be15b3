//! The discretized temperature field along the rod.

use std::ops::{Deref, DerefMut, Index};

use crate::error::ConfigError;
use crate::params::Boundary;

/// Temperature samples at evenly spaced points along the rod.
///
/// Index `i` corresponds to position `i * dx`. The length is fixed at
/// construction (the samples live in a boxed slice) and is always at least
/// [`MIN_POINTS`](Self::MIN_POINTS). Index 0 holds the left boundary
/// temperature and index `N-1` the right one; the driving loop re-pins both
/// after every update via [`pin_boundaries()`](Self::pin_boundaries).
///
/// Interior samples can only be written through [`InteriorMut`], which
/// never exposes the boundary slots.
///
/// # Examples
///
/// ```
/// use rodheat_core::{Boundary, FieldState};
///
/// let state = FieldState::uniform(5, 25.0, Boundary::new(100.0, 50.0)).unwrap();
/// assert_eq!(state.as_slice(), &[100.0, 25.0, 25.0, 25.0, 50.0]);
/// assert_eq!(state.interior(), &[25.0, 25.0, 25.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldState {
    samples: Box<[f64]>,
}

impl FieldState {
    /// Minimum number of grid points: two boundaries and one interior point.
    pub const MIN_POINTS: usize = 3;

    /// Fill `points` samples with `t_initial`, then pin slot 0 to
    /// `boundary.left` and slot `points - 1` to `boundary.right`.
    ///
    /// Returns `Err(ConfigError::TooFewPoints)` if `points < 3`.
    pub fn uniform(points: usize, t_initial: f64, boundary: Boundary) -> Result<Self, ConfigError> {
        if points < Self::MIN_POINTS {
            return Err(ConfigError::TooFewPoints { points });
        }
        if !t_initial.is_finite() {
            return Err(ConfigError::NonFiniteTemperature {
                name: "t_initial",
                value: t_initial,
            });
        }
        boundary.validate()?;
        let mut state = Self {
            samples: vec![t_initial; points].into_boxed_slice(),
        };
        state.pin_boundaries(boundary);
        Ok(state)
    }

    /// Build a state from an explicit initial profile.
    ///
    /// The endpoints of `values` are overwritten with the boundary
    /// temperatures; every sample must be finite.
    pub fn from_values(values: Vec<f64>, boundary: Boundary) -> Result<Self, ConfigError> {
        if values.len() < Self::MIN_POINTS {
            return Err(ConfigError::TooFewPoints {
                points: values.len(),
            });
        }
        boundary.validate()?;
        let last = values.len() - 1;
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|&(i, v)| i != 0 && i != last && !v.is_finite())
        {
            return Err(ConfigError::NonFiniteSample { index, value });
        }
        let mut state = Self {
            samples: values.into_boxed_slice(),
        };
        state.pin_boundaries(boundary);
        Ok(state)
    }

    /// Number of grid points `N`.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always returns `false`: construction rejects fewer than three points.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All samples in index order.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Sample at index `i`, or `None` if out of range.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.samples.get(i).copied()
    }

    /// Temperature at index 0.
    pub fn left(&self) -> f64 {
        self.samples[0]
    }

    /// Temperature at index `N-1`.
    pub fn right(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }

    /// Interior samples, indices `1..=N-2`.
    pub fn interior(&self) -> &[f64] {
        let n = self.samples.len();
        &self.samples[1..n - 1]
    }

    /// Mutable view over the interior samples only.
    pub fn interior_mut(&mut self) -> InteriorMut<'_> {
        let n = self.samples.len();
        InteriorMut {
            samples: &mut self.samples[1..n - 1],
        }
    }

    /// Overwrite both endpoints with the boundary temperatures.
    pub fn pin_boundaries(&mut self, boundary: Boundary) {
        let last = self.samples.len() - 1;
        self.samples[0] = boundary.left;
        self.samples[last] = boundary.right;
    }

    /// Smallest sample (NaN samples are ignored).
    pub fn min(&self) -> f64 {
        self.samples.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest sample (NaN samples are ignored).
    pub fn max(&self) -> f64 {
        self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Copy the samples into a new `Vec`.
    pub fn to_vec(&self) -> Vec<f64> {
        self.samples.to_vec()
    }

    /// Consume the state into its samples.
    pub fn into_vec(self) -> Vec<f64> {
        self.samples.into_vec()
    }
}

impl Index<usize> for FieldState {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.samples[i]
    }
}

/// Write access to the interior of a [`FieldState`].
///
/// Dereferences to a slice of length `N - 2`: element `k` is grid index
/// `k + 1`. The boundary slots are not reachable through this view.
#[derive(Debug)]
pub struct InteriorMut<'a> {
    samples: &'a mut [f64],
}

impl Deref for InteriorMut<'_> {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        self.samples
    }
}

impl DerefMut for InteriorMut<'_> {
    fn deref_mut(&mut self) -> &mut [f64] {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn boundary() -> Boundary {
        Boundary::new(100.0, 50.0)
    }

    #[test]
    fn uniform_pins_endpoints() {
        let s = FieldState::uniform(3, 25.0, boundary()).unwrap();
        assert_eq!(s.as_slice(), &[100.0, 25.0, 50.0]);
        assert_eq!(s.left(), 100.0);
        assert_eq!(s.right(), 50.0);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn uniform_rejects_fewer_than_three_points() {
        for points in 0..3 {
            assert_eq!(
                FieldState::uniform(points, 25.0, boundary()),
                Err(ConfigError::TooFewPoints { points })
            );
        }
    }

    #[test]
    fn uniform_rejects_non_finite_initial() {
        assert!(matches!(
            FieldState::uniform(5, f64::NAN, boundary()),
            Err(ConfigError::NonFiniteTemperature {
                name: "t_initial",
                ..
            })
        ));
    }

    #[test]
    fn from_values_overwrites_endpoints() {
        let s = FieldState::from_values(vec![0.0, 1.0, 2.0, 3.0], boundary()).unwrap();
        assert_eq!(s.as_slice(), &[100.0, 1.0, 2.0, 50.0]);
    }

    #[test]
    fn from_values_rejects_non_finite_interior() {
        let err = FieldState::from_values(vec![0.0, 1.0, f64::INFINITY, 3.0], boundary())
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonFiniteSample {
                index: 2,
                value: f64::INFINITY
            }
        );
    }

    #[test]
    fn from_values_ignores_non_finite_endpoints() {
        // Endpoints are replaced by the boundary, so their input value is irrelevant.
        let s = FieldState::from_values(vec![f64::NAN, 1.0, f64::NAN], boundary()).unwrap();
        assert_eq!(s.as_slice(), &[100.0, 1.0, 50.0]);
    }

    #[test]
    fn interior_mut_cannot_reach_boundaries() {
        let mut s = FieldState::uniform(4, 0.0, boundary()).unwrap();
        {
            let mut interior = s.interior_mut();
            assert_eq!(interior.len(), 2);
            interior.fill(7.0);
        }
        assert_eq!(s.as_slice(), &[100.0, 7.0, 7.0, 50.0]);
    }

    #[test]
    fn pin_boundaries_restores_endpoints() {
        let mut s = FieldState::from_values(vec![1.0, 2.0, 3.0], boundary()).unwrap();
        s.pin_boundaries(Boundary::new(-1.0, -2.0));
        assert_eq!(s.as_slice(), &[-1.0, 2.0, -2.0]);
    }

    #[test]
    fn min_max_and_index() {
        let s = FieldState::from_values(vec![0.0, -3.0, 200.0, 0.0], boundary()).unwrap();
        assert_eq!(s.min(), -3.0);
        assert_eq!(s.max(), 200.0);
        assert_eq!(s[2], 200.0);
        assert_eq!(s.get(4), None);
    }

    #[test]
    fn clone_is_independent() {
        let mut a = FieldState::uniform(5, 1.0, boundary()).unwrap();
        let b = a.clone();
        a.interior_mut()[0] = 99.0;
        assert_eq!(b[1], 1.0);
        assert_eq!(a[1], 99.0);
    }

    proptest! {
        #[test]
        fn uniform_layout_holds_for_any_size(
            points in 3usize..256,
            init in -1e6f64..1e6,
            left in -1e6f64..1e6,
            right in -1e6f64..1e6,
        ) {
            let s = FieldState::uniform(points, init, Boundary::new(left, right)).unwrap();
            prop_assert_eq!(s.len(), points);
            prop_assert_eq!(s.left(), left);
            prop_assert_eq!(s.right(), right);
            prop_assert!(s.interior().iter().all(|&v| v == init));
        }
    }
}
