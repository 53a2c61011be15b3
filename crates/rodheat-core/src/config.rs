//! Rod configuration, validation, and derivation of the run inputs.
//!
//! [`RodConfig`] is the immutable input bundle for one simulation run.
//! [`validate()`](RodConfig::validate) checks every structural invariant up
//! front; the derivation helpers ([`grid()`](RodConfig::grid),
//! [`params()`](RodConfig::params), [`initial_state()`](RodConfig::initial_state))
//! re-run the relevant checks so they are safe to call on an unvalidated
//! config.

use crate::error::{is_finite_positive, ConfigError};
use crate::field::FieldState;
use crate::grid::RodGrid;
use crate::params::{Boundary, SimulationParams};

// ── StepCount ──────────────────────────────────────────────────────

/// How many steps the driving loop performs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepCount {
    /// An explicit step count `nt`.
    Steps(usize),
    /// A total simulated time; `nt = trunc(total_time / dt)`.
    ///
    /// The division truncates: if `total_time` is not an exact multiple of
    /// `dt`, the trailing partial interval is not simulated. Floating-point
    /// quotients just below an integer truncate down as well, so
    /// `0.3 / 0.1` yields 2 steps.
    TotalTime(f64),
}

impl StepCount {
    /// Resolve to a concrete step count for time step `dt`.
    pub fn resolve(&self, dt: f64) -> Result<usize, ConfigError> {
        match *self {
            Self::Steps(nt) => Ok(nt),
            Self::TotalTime(total) => {
                if !total.is_finite() || total < 0.0 {
                    return Err(ConfigError::InvalidTotalTime { value: total });
                }
                if !is_finite_positive(dt) {
                    return Err(ConfigError::InvalidTimeStep { value: dt });
                }
                // `as` truncates toward zero and saturates at usize::MAX.
                Ok((total / dt) as usize)
            }
        }
    }
}

// ── RodConfig ──────────────────────────────────────────────────────

/// Complete input for one simulation run.
///
/// The [`Default`] value is the reference rod: a 1 m rod with 20 points,
/// `alpha = 1e-4` m²/s, `dt = 0.01` s over 10 s (1000 steps), held at
/// 100 °C on the left and 50 °C on the right, starting at 25 °C.
#[derive(Clone, Debug, PartialEq)]
pub struct RodConfig {
    /// Rod length.
    pub length: f64,
    /// Number of grid points `N`, including both ends. Minimum: 3.
    pub points: usize,
    /// Thermal diffusivity.
    pub alpha: f64,
    /// Initial temperature of every interior point.
    pub t_initial: f64,
    /// Fixed temperature at the left end.
    pub t_left: f64,
    /// Fixed temperature at the right end.
    pub t_right: f64,
    /// Time step.
    pub dt: f64,
    /// Number of steps, given directly or as total simulated time.
    pub steps: StepCount,
}

impl Default for RodConfig {
    fn default() -> Self {
        Self {
            length: 1.0,
            points: 20,
            alpha: 1e-4,
            t_initial: 25.0,
            t_left: 100.0,
            t_right: 50.0,
            dt: 0.01,
            steps: StepCount::TotalTime(10.0),
        }
    }
}

impl RodConfig {
    /// Validate all structural invariants, returning the first violation.
    ///
    /// The stability bound on `alpha * dt / dx²` is deliberately not part
    /// of validation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid: point count, length, derived spacing.
        self.grid()?;
        // 2. Time step and diffusivity.
        if !is_finite_positive(self.dt) {
            return Err(ConfigError::InvalidTimeStep { value: self.dt });
        }
        if !is_finite_positive(self.alpha) {
            return Err(ConfigError::InvalidDiffusivity { value: self.alpha });
        }
        // 3. Temperatures.
        self.boundary().validate()?;
        if !self.t_initial.is_finite() {
            return Err(ConfigError::NonFiniteTemperature {
                name: "t_initial",
                value: self.t_initial,
            });
        }
        // 4. Step count.
        self.step_count()?;
        Ok(())
    }

    /// The spatial discretization.
    pub fn grid(&self) -> Result<RodGrid, ConfigError> {
        RodGrid::new(self.length, self.points)
    }

    /// The boundary temperature pair.
    pub fn boundary(&self) -> Boundary {
        Boundary::new(self.t_left, self.t_right)
    }

    /// The resolved step count `nt`.
    pub fn step_count(&self) -> Result<usize, ConfigError> {
        self.steps.resolve(self.dt)
    }

    /// The immutable parameter bundle for the stepper and driving loop.
    pub fn params(&self) -> Result<SimulationParams, ConfigError> {
        let grid = self.grid()?;
        let nt = self.step_count()?;
        SimulationParams::new(grid.dx(), self.dt, self.alpha, self.boundary(), nt)
    }

    /// The uniform initial field with pinned boundaries.
    pub fn initial_state(&self) -> Result<FieldState, ConfigError> {
        FieldState::uniform(self.points, self.t_initial, self.boundary())
    }
}
