//! Uniform 1D discretization of the rod.

use crate::error::{is_finite_positive, ConfigError};
use crate::field::FieldState;

/// A rod of `length` discretized into `points` evenly spaced samples.
///
/// Point `i` sits at `i * dx` with `dx = length / (points - 1)`, so the
/// first and last points are the two rod ends.
///
/// # Examples
///
/// ```
/// use rodheat_core::RodGrid;
///
/// let grid = RodGrid::new(1.0, 5).unwrap();
/// assert_eq!(grid.dx(), 0.25);
/// assert_eq!(grid.positions(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RodGrid {
    length: f64,
    points: usize,
    dx: f64,
}

impl RodGrid {
    /// Create a grid.
    ///
    /// Returns `Err(ConfigError::TooFewPoints)` if `points < 3`, and
    /// `Err(ConfigError::InvalidLength)` for a non-finite or non-positive
    /// length. A length so small that `dx` underflows to zero is rejected
    /// with `Err(ConfigError::InvalidSpacing)`.
    pub fn new(length: f64, points: usize) -> Result<Self, ConfigError> {
        if points < FieldState::MIN_POINTS {
            return Err(ConfigError::TooFewPoints { points });
        }
        if !is_finite_positive(length) {
            return Err(ConfigError::InvalidLength { value: length });
        }
        let dx = length / (points - 1) as f64;
        if !is_finite_positive(dx) {
            return Err(ConfigError::InvalidSpacing { value: dx });
        }
        Ok(Self { length, points, dx })
    }

    /// Rod length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of grid points `N`.
    pub fn points(&self) -> usize {
        self.points
    }

    /// Spacing between adjacent points.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Coordinate of point `i`, or `None` if `i >= N`.
    pub fn position(&self, i: usize) -> Option<f64> {
        (i < self.points).then(|| i as f64 * self.dx)
    }

    /// Coordinates `i * dx` for every point in index order.
    pub fn positions(&self) -> Vec<f64> {
        (0..self.points).map(|i| i as f64 * self.dx).collect()
    }
}
