//! Immutable physical and numerical parameters for one simulation run.

use crate::error::{is_finite_positive, ConfigError};

/// Fixed Dirichlet boundary temperatures at both rod ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    /// Temperature pinned at index 0.
    pub left: f64,
    /// Temperature pinned at index `N-1`.
    pub right: f64,
}

impl Boundary {
    /// Create a boundary pair.
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Reject NaN or infinite boundary temperatures.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.left.is_finite() {
            return Err(ConfigError::NonFiniteTemperature {
                name: "t_left",
                value: self.left,
            });
        }
        if !self.right.is_finite() {
            return Err(ConfigError::NonFiniteTemperature {
                name: "t_right",
                value: self.right,
            });
        }
        Ok(())
    }
}

/// The read-only parameter bundle consumed by the stepper and the driving loop.
///
/// Built once before the loop starts, either directly through
/// [`new()`](Self::new) or from a [`RodConfig`](crate::RodConfig). Fields are
/// private; the bundle cannot change after construction.
///
/// The explicit scheme is stable only while the Fourier number
/// `r = alpha * dt / dx²` stays at or below `0.5`. That bound is a
/// precondition on the caller: nothing in the workspace checks or corrects
/// it while stepping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    dx: f64,
    dt: f64,
    alpha: f64,
    boundary: Boundary,
    nt: usize,
}

impl SimulationParams {
    /// Stability threshold for the Fourier number of the explicit scheme.
    pub const STABILITY_BOUND: f64 = 0.5;

    /// Create a validated parameter bundle.
    ///
    /// `dx`, `dt`, and `alpha` must be finite and positive; boundary
    /// temperatures must be finite.
    pub fn new(
        dx: f64,
        dt: f64,
        alpha: f64,
        boundary: Boundary,
        nt: usize,
    ) -> Result<Self, ConfigError> {
        if !is_finite_positive(dx) {
            return Err(ConfigError::InvalidSpacing { value: dx });
        }
        if !is_finite_positive(dt) {
            return Err(ConfigError::InvalidTimeStep { value: dt });
        }
        if !is_finite_positive(alpha) {
            return Err(ConfigError::InvalidDiffusivity { value: alpha });
        }
        boundary.validate()?;
        Ok(Self {
            dx,
            dt,
            alpha,
            boundary,
            nt,
        })
    }

    /// Spatial step between adjacent grid points.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Time step.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Thermal diffusivity.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Boundary temperatures.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Total number of steps the driving loop performs.
    pub fn nt(&self) -> usize {
        self.nt
    }

    /// The Fourier number `alpha * dt / dx²` used as the stencil weight.
    pub fn fourier_number(&self) -> f64 {
        self.alpha * self.dt / (self.dx * self.dx)
    }

    /// Whether [`fourier_number()`](Self::fourier_number) is within
    /// [`STABILITY_BOUND`](Self::STABILITY_BOUND).
    ///
    /// Informational only. The stepper never consults it.
    pub fn within_stability_bound(&self) -> bool {
        self.fourier_number() <= Self::STABILITY_BOUND
    }
}
