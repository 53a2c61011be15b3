//! Explicit forward-time, centered-space (FTCS) diffusion stepper.
//!
//! Reads the previous field as a frozen snapshot (Jacobi-style) and writes
//! every interior point of the next field:
//!
//! ```text
//! next[i] = prev[i] + r * (prev[i+1] - 2 * prev[i] + prev[i-1]),   r = alpha * dt / dx²
//! ```
//!
//! The scheme is stable only for `r <= 0.5`. Above that, errors grow
//! geometrically and show up as oscillation in later states. That is the
//! scheme's documented behavior and is left untouched here.

use rodheat_core::{FieldState, InteriorMut, SimulationParams};

use crate::stepper::Stepper;

/// The FTCS update rule for the 1D heat equation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ftcs;

impl Ftcs {
    /// Create the stepper.
    pub fn new() -> Self {
        Self
    }

    /// Largest `dt` satisfying `alpha * dt / dx² <= 0.5`.
    ///
    /// Informational; the stepper never enforces it.
    pub fn max_stable_dt(dx: f64, alpha: f64) -> f64 {
        SimulationParams::STABILITY_BOUND * dx * dx / alpha
    }
}

impl Stepper for Ftcs {
    fn name(&self) -> &str {
        "Ftcs"
    }

    fn step(&self, prev: &FieldState, mut next: InteriorMut<'_>, params: &SimulationParams) {
        let r = params.fourier_number();
        // Each window is (i-1, i, i+1) for interior index i.
        for (w, out) in prev.as_slice().windows(3).zip(next.iter_mut()) {
            *out = w[1] + r * (w[2] - 2.0 * w[1] + w[0]);
        }
    }
}

/// Advance `prev` by one step and return the result as a new state.
///
/// The returned state never aliases `prev`. Its endpoints are copied
/// unchanged from `prev`; only the interior is updated.
///
/// # Examples
///
/// ```
/// use rodheat_core::{Boundary, FieldState, SimulationParams};
/// use rodheat_stepper::ftcs;
///
/// let boundary = Boundary::new(100.0, 50.0);
/// let params = SimulationParams::new(0.5, 0.01, 1e-4, boundary, 1).unwrap();
/// let prev = FieldState::uniform(3, 25.0, boundary).unwrap();
///
/// let next = ftcs::step(&prev, &params);
/// assert!((next[1] - 25.0004).abs() < 1e-12);
/// assert_eq!(next[0], 100.0);
/// assert_eq!(next[2], 50.0);
/// ```
pub fn step(prev: &FieldState, params: &SimulationParams) -> FieldState {
    let mut next = prev.clone();
    Ftcs.step(prev, next.interior_mut(), params);
    next
}
