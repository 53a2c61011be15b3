//! Error types for rodheat configuration.
//!
//! Every failure the core can report is an invalid-configuration
//! rejection at setup time. Stepping itself is infallible, and numerical
//! instability is not an error.

use std::error::Error;
use std::fmt;

/// Invalid configuration detected while building a simulation.
///
/// Returned by [`RodConfig::validate()`](crate::RodConfig::validate) and by
/// the validated constructors of [`FieldState`](crate::FieldState),
/// [`RodGrid`](crate::RodGrid), and
/// [`SimulationParams`](crate::SimulationParams).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Fewer than three grid points, so no interior point exists.
    TooFewPoints {
        /// The configured point count.
        points: usize,
    },
    /// Rod length is NaN, infinite, zero, or negative.
    InvalidLength {
        /// The invalid value.
        value: f64,
    },
    /// Spatial step `dx` is not finite and positive.
    InvalidSpacing {
        /// The invalid value.
        value: f64,
    },
    /// Time step `dt` is NaN, infinite, zero, or negative.
    InvalidTimeStep {
        /// The invalid value.
        value: f64,
    },
    /// Diffusivity `alpha` is NaN, infinite, zero, or negative.
    InvalidDiffusivity {
        /// The invalid value.
        value: f64,
    },
    /// Total simulated time is NaN, infinite, or negative.
    InvalidTotalTime {
        /// The invalid value.
        value: f64,
    },
    /// A boundary or initial temperature is NaN or infinite.
    NonFiniteTemperature {
        /// Which temperature was rejected (`"t_left"`, `"t_right"`, `"t_initial"`).
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// An explicit initial state does not match the configured point count.
    PointCountMismatch {
        /// Point count of the configured grid.
        expected: usize,
        /// Length of the supplied state.
        actual: usize,
    },
    /// A sample of an explicit initial profile is NaN or infinite.
    NonFiniteSample {
        /// Index of the first offending sample.
        index: usize,
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { points } => {
                write!(f, "rod needs at least 3 grid points, got {points}")
            }
            Self::InvalidLength { value } => {
                write!(f, "rod length must be finite and positive, got {value}")
            }
            Self::InvalidSpacing { value } => {
                write!(f, "dx must be finite and positive, got {value}")
            }
            Self::InvalidTimeStep { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::InvalidDiffusivity { value } => {
                write!(f, "alpha must be finite and positive, got {value}")
            }
            Self::InvalidTotalTime { value } => {
                write!(f, "total time must be finite and non-negative, got {value}")
            }
            Self::NonFiniteTemperature { name, value } => {
                write!(f, "{name} must be finite, got {value}")
            }
            Self::PointCountMismatch { expected, actual } => {
                write!(f, "initial state has {actual} points, grid has {expected}")
            }
            Self::NonFiniteSample { index, value } => {
                write!(f, "initial profile sample {index} must be finite, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Returns `true` if `v` is finite and strictly positive.
pub(crate) fn is_finite_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let e = ConfigError::TooFewPoints { points: 2 };
        assert_eq!(e.to_string(), "rod needs at least 3 grid points, got 2");

        let e = ConfigError::NonFiniteTemperature {
            name: "t_left",
            value: f64::INFINITY,
        };
        assert_eq!(e.to_string(), "t_left must be finite, got inf");
    }

    #[test]
    fn finite_positive_rejects_edge_values() {
        assert!(is_finite_positive(1e-300));
        assert!(!is_finite_positive(0.0));
        assert!(!is_finite_positive(-0.0));
        assert!(!is_finite_positive(-1.0));
        assert!(!is_finite_positive(f64::NAN));
        assert!(!is_finite_positive(f64::INFINITY));
    }
}
