//! Reusable configurations, steppers, and assertions.
//!
//! Configurations:
//!
//! - [`reference_config`]: the default 20-point rod, 1000 steps.
//! - [`single_point_config`]: 3 points, `dx = 0.5`, one interior point.
//! - [`stable_config`]: 11 points with `r = 0.4`, converges quickly.
//! - [`unstable_config`]: 11 points with `r = 1.0`, diverges.
//!
//! Steppers:
//!
//! - [`CountingStepper`]: FTCS that counts its calls.
//! - [`FrozenStepper`]: copies the interior unchanged.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rodheat_core::{FieldState, InteriorMut, RodConfig, SimulationParams, StepCount};
use rodheat_stepper::{Ftcs, Stepper};

// ── Configurations ─────────────────────────────────────────────────

/// The default reference rod (1 m, 20 points, 1000 steps).
pub fn reference_config() -> RodConfig {
    RodConfig::default()
}

/// Three points on a 1 m rod (`dx = 0.5`), `alpha = 1e-4`, `dt = 0.01`,
/// starting from `[100, 25, 50]`.
pub fn single_point_config(nt: usize) -> RodConfig {
    RodConfig {
        length: 1.0,
        points: 3,
        alpha: 1e-4,
        t_initial: 25.0,
        t_left: 100.0,
        t_right: 50.0,
        dt: 0.01,
        steps: StepCount::Steps(nt),
    }
}

/// Eleven points, `dx = 0.1`, `alpha = 1`, `dt = 0.004` (`r = 0.4`).
pub fn stable_config(nt: usize) -> RodConfig {
    RodConfig {
        length: 1.0,
        points: 11,
        alpha: 1.0,
        t_initial: 25.0,
        t_left: 100.0,
        t_right: 50.0,
        dt: 0.004,
        steps: StepCount::Steps(nt),
    }
}

/// Same rod as [`stable_config`] with `dt = 0.01` (`r = 1.0`).
pub fn unstable_config(nt: usize) -> RodConfig {
    RodConfig {
        dt: 0.01,
        ..stable_config(nt)
    }
}

// ── Steppers ───────────────────────────────────────────────────────

/// Delegates to [`Ftcs`] and counts how often it is called.
///
/// The counter is shared through an `Arc` so tests can read it after the
/// stepper has been moved into a simulation.
#[derive(Default)]
pub struct CountingStepper {
    calls: Arc<AtomicUsize>,
}

impl CountingStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the call counter.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Stepper for CountingStepper {
    fn name(&self) -> &str {
        "counting"
    }

    fn step(&self, prev: &FieldState, next: InteriorMut<'_>, params: &SimulationParams) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ftcs.step(prev, next, params);
    }
}

/// Leaves the interior untouched from one step to the next.
pub struct FrozenStepper;

impl Stepper for FrozenStepper {
    fn name(&self) -> &str {
        "frozen"
    }

    fn step(&self, prev: &FieldState, mut next: InteriorMut<'_>, _params: &SimulationParams) {
        next.copy_from_slice(prev.interior());
    }
}

// ── Assertions ─────────────────────────────────────────────────────

/// Steady-state profile: linear interpolation between the boundary
/// temperatures of `config`.
pub fn linear_profile(config: &RodConfig) -> Vec<f64> {
    let last = (config.points - 1) as f64;
    (0..config.points)
        .map(|i| {
            let w = i as f64 / last;
            config.t_left + (config.t_right - config.t_left) * w
        })
        .collect()
}

/// Largest absolute difference between `state` and `profile`.
pub fn max_deviation(state: &FieldState, profile: &[f64]) -> f64 {
    assert_eq!(state.len(), profile.len(), "profile length mismatch");
    state
        .as_slice()
        .iter()
        .zip(profile)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

/// Assert two state sequences are identical down to the bit pattern.
pub fn assert_bit_identical(a: &[FieldState], b: &[FieldState]) {
    assert_eq!(a.len(), b.len(), "sequence lengths differ");
    for (k, (sa, sb)) in a.iter().zip(b).enumerate() {
        assert_eq!(sa.len(), sb.len(), "step {k}: lengths differ");
        for (i, (x, y)) in sa.as_slice().iter().zip(sb.as_slice()).enumerate() {
            assert_eq!(
                x.to_bits(),
                y.to_bits(),
                "step {k}, point {i}: {x} != {y}"
            );
        }
    }
}
