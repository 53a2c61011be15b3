//! Lockstep driving loop.
//!
//! [`Simulation`] is the primary user-facing API. Each call to
//! [`step()`](Simulation::step) runs the stepper once, re-pins the Dirichlet
//! boundaries, and appends a copy of the new state to the [`History`].
//! [`run()`](Simulation::run) steps until the configured `nt` is reached
//! and hands back a [`RunOutput`].
//!
//! # Buffers
//!
//! The loop ping-pongs between two field buffers: the stepper reads the
//! current state and writes the interior of the scratch buffer, then the
//! two are swapped. The read snapshot and the write target are therefore
//! never the same memory within a step.
//!
//! # Ownership model
//!
//! `Simulation` is [`Send`] (the stepper is `Send`) but exposes no shared
//! mutable state; all mutation goes through `&mut self` on a single thread.

use std::mem;
use std::time::{Duration, Instant};

use rodheat_core::{ConfigError, FieldState, RodConfig, RodGrid, SimulationParams};
use rodheat_stepper::{Ftcs, Stepper};

use crate::history::History;
use crate::metrics::RunMetrics;

// Compile-time assertion: Simulation is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

// ── RunOutput ───────────────────────────────────────────────────

/// Everything a finished run hands to external presentation.
#[derive(Clone, Debug)]
pub struct RunOutput {
    /// One state per completed step; length `nt`.
    pub history: History,
    /// Grid coordinates `i * dx` for `i` in `0..N`.
    pub positions: Vec<f64>,
    /// Parameters the run used.
    pub params: SimulationParams,
    /// Loop counters and timings.
    pub metrics: RunMetrics,
}

// ── Simulation ──────────────────────────────────────────────────

/// Single-threaded simulation of one rod.
///
/// Created from a [`RodConfig`] via [`new()`](Simulation::new) (FTCS
/// stepper) or [`with_stepper()`](Simulation::with_stepper).
///
/// # Example
///
/// ```
/// use rodheat_core::{RodConfig, StepCount};
/// use rodheat_engine::Simulation;
///
/// let config = RodConfig { steps: StepCount::Steps(10), ..RodConfig::default() };
/// let mut sim = Simulation::new(&config).unwrap();
/// while let Some(state) = sim.step() {
///     assert_eq!(state.left(), 100.0);
/// }
/// assert_eq!(sim.history().len(), 10);
/// ```
pub struct Simulation {
    stepper: Box<dyn Stepper>,
    params: SimulationParams,
    grid: RodGrid,
    initial: FieldState,
    current: FieldState,
    scratch: FieldState,
    history: History,
    step_index: usize,
    busy: Duration,
}

impl Simulation {
    /// Upper bound on history entries reserved up front.
    const MAX_PREALLOC: usize = 1 << 16;

    /// Create a simulation using the [`Ftcs`] stepper.
    pub fn new(config: &RodConfig) -> Result<Self, ConfigError> {
        Self::with_stepper(config, Ftcs)
    }

    /// Create a simulation with a caller-supplied stepper.
    ///
    /// Validates the configuration and builds the uniform initial field.
    pub fn with_stepper<S: Stepper>(config: &RodConfig, stepper: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let initial = config.initial_state()?;
        Self::build(config, initial, Box::new(stepper))
    }

    /// Create a simulation starting from an explicit initial state.
    ///
    /// `initial` must have exactly `config.points` samples. Its endpoints
    /// are re-pinned to the configured boundary temperatures.
    pub fn with_initial_state<S: Stepper>(
        config: &RodConfig,
        mut initial: FieldState,
        stepper: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if initial.len() != config.points {
            return Err(ConfigError::PointCountMismatch {
                expected: config.points,
                actual: initial.len(),
            });
        }
        initial.pin_boundaries(config.boundary());
        Self::build(config, initial, Box::new(stepper))
    }

    fn build(
        config: &RodConfig,
        initial: FieldState,
        stepper: Box<dyn Stepper>,
    ) -> Result<Self, ConfigError> {
        let grid = config.grid()?;
        let params = config.params()?;
        Ok(Self {
            stepper,
            params,
            grid,
            current: initial.clone(),
            scratch: initial.clone(),
            initial,
            history: History::with_capacity(params.nt().min(Self::MAX_PREALLOC), params.dt()),
            step_index: 0,
            busy: Duration::ZERO,
        })
    }

    /// Execute one step.
    ///
    /// Returns the new state, or `None` once `nt` steps have run. The
    /// returned reference borrows from `self`; the recorded history entry
    /// is a separate copy.
    pub fn step(&mut self) -> Option<&FieldState> {
        if self.step_index >= self.params.nt() {
            return None;
        }
        let start = Instant::now();

        self.stepper
            .step(&self.current, self.scratch.interior_mut(), &self.params);
        self.scratch.pin_boundaries(self.params.boundary());
        mem::swap(&mut self.current, &mut self.scratch);
        self.history.push(self.current.clone());
        self.step_index += 1;

        self.busy += start.elapsed();
        Some(&self.current)
    }

    /// Run the remaining steps and return the output.
    pub fn run(mut self) -> RunOutput {
        while self.step().is_some() {}
        let metrics = self.metrics();
        RunOutput {
            positions: self.grid.positions(),
            params: self.params,
            history: self.history,
            metrics,
        }
    }

    /// Restore the initial state and discard all recorded history.
    pub fn reset(&mut self) {
        self.current.clone_from(&self.initial);
        self.history = History::with_capacity(
            self.params.nt().min(Self::MAX_PREALLOC),
            self.params.dt(),
        );
        self.step_index = 0;
        self.busy = Duration::ZERO;
    }

    /// Number of steps executed so far.
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Steps left before `nt` is reached.
    pub fn remaining(&self) -> usize {
        self.params.nt() - self.step_index
    }

    /// Whether all `nt` steps have run.
    pub fn is_finished(&self) -> bool {
        self.step_index >= self.params.nt()
    }

    /// The current field.
    pub fn current(&self) -> &FieldState {
        &self.current
    }

    /// The field the run started from.
    pub fn initial(&self) -> &FieldState {
        &self.initial
    }

    /// States recorded so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Parameters of this run.
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Spatial discretization of this run.
    pub fn grid(&self) -> &RodGrid {
        &self.grid
    }

    /// Name of the configured stepper.
    pub fn stepper_name(&self) -> &str {
        self.stepper.name()
    }

    /// Counters and timings so far.
    pub fn metrics(&self) -> RunMetrics {
        RunMetrics {
            steps: self.step_index,
            total_us: self.busy.as_micros() as u64,
            history_bytes: self.history.retained_bytes(),
        }
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("stepper", &self.stepper.name())
            .field("step_index", &self.step_index)
            .field("nt", &self.params.nt())
            .field("points", &self.grid.points())
            .finish()
    }
}

/// Validate `config`, run it to completion with [`Ftcs`], and return the output.
///
/// # Example
///
/// ```
/// use rodheat_core::RodConfig;
///
/// let output = rodheat_engine::run(&RodConfig::default()).unwrap();
/// assert_eq!(output.history.len(), 1000);
/// assert_eq!(output.positions.len(), 20);
/// ```
pub fn run(config: &RodConfig) -> Result<RunOutput, ConfigError> {
    Ok(Simulation::new(config)?.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rodheat_core::{InteriorMut, StepCount};
    use rodheat_test_utils::{single_point_config, CountingStepper, FrozenStepper};

    fn config_with_steps(nt: usize) -> RodConfig {
        RodConfig {
            steps: StepCount::Steps(nt),
            ..RodConfig::default()
        }
    }

    #[test]
    fn zero_steps_yield_empty_history() {
        let output = run(&config_with_steps(0)).unwrap();
        assert!(output.history.is_empty());
        assert_eq!(output.metrics.steps, 0);
        assert_eq!(output.positions.len(), 20);
    }

    #[test]
    fn history_length_matches_nt() {
        let output = run(&config_with_steps(37)).unwrap();
        assert_eq!(output.history.len(), 37);
        assert!(output.history.iter().all(|s| s.len() == 20));
        assert_eq!(output.metrics.steps, 37);
        assert_eq!(output.metrics.history_bytes, 37 * 20 * 8);
    }

    #[test]
    fn step_stops_at_nt() {
        let mut sim = Simulation::new(&config_with_steps(2)).unwrap();
        assert!(sim.step().is_some());
        assert!(sim.step().is_some());
        assert!(sim.step().is_none());
        assert!(sim.is_finished());
        assert_eq!(sim.remaining(), 0);
        assert_eq!(sim.history().len(), 2);
    }

    #[test]
    fn first_entry_is_one_step_from_initial() {
        let cfg = single_point_config(1);
        let mut sim = Simulation::new(&cfg).unwrap();
        let initial = sim.current().clone();
        sim.step();
        let expected = rodheat_stepper::ftcs::step(&initial, sim.params());
        assert_eq!(sim.history().get(0), Some(&expected));
        assert!((expected[1] - 25.0004).abs() < 1e-12);
    }

    #[test]
    fn recorded_entries_are_copies() {
        let mut sim = Simulation::new(&config_with_steps(3)).unwrap();
        sim.step();
        let first = sim.history().get(0).cloned().unwrap();
        sim.step();
        sim.step();
        assert_eq!(sim.history().get(0), Some(&first));
        assert_ne!(sim.history().get(0), sim.history().get(2));
    }

    #[test]
    fn custom_stepper_is_called_once_per_step() {
        let stepper = CountingStepper::new();
        let calls = stepper.calls();
        let sim = Simulation::with_stepper(&config_with_steps(5), stepper).unwrap();
        assert_eq!(sim.stepper_name(), "counting");
        let output = sim.run();
        assert_eq!(calls.load(std::sync::atomic::Ordering::Relaxed), 5);
        assert_eq!(output.history.len(), 5);
    }

    #[test]
    fn frozen_stepper_keeps_initial_state() {
        let cfg = config_with_steps(4);
        let sim = Simulation::with_stepper(&cfg, FrozenStepper).unwrap();
        let initial = sim.initial().clone();
        let output = sim.run();
        assert!(output.history.iter().all(|s| *s == initial));
    }

    #[test]
    fn explicit_initial_state_is_repinned() {
        let cfg = RodConfig {
            points: 4,
            steps: StepCount::Steps(1),
            ..RodConfig::default()
        };
        let initial = FieldState::from_values(vec![0.0, 30.0, 40.0, 0.0], cfg.boundary()).unwrap();
        let sim = Simulation::with_initial_state(&cfg, initial, Ftcs).unwrap();
        assert_eq!(sim.initial().as_slice(), &[100.0, 30.0, 40.0, 50.0]);
    }

    #[test]
    fn explicit_initial_state_must_match_grid() {
        let cfg = config_with_steps(1);
        let initial = FieldState::uniform(5, 0.0, cfg.boundary()).unwrap();
        let err = Simulation::with_initial_state(&cfg, initial, Ftcs).unwrap_err();
        assert_eq!(
            err,
            ConfigError::PointCountMismatch {
                expected: 20,
                actual: 5
            }
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = RodConfig {
            points: 2,
            ..RodConfig::default()
        };
        assert_eq!(
            Simulation::new(&cfg).unwrap_err(),
            ConfigError::TooFewPoints { points: 2 }
        );
        assert!(run(&cfg).is_err());
    }

    #[test]
    fn reset_restarts_from_initial() {
        let mut sim = Simulation::new(&config_with_steps(3)).unwrap();
        sim.step();
        sim.step();
        let second = sim.current().clone();
        sim.reset();
        assert_eq!(sim.step_index(), 0);
        assert!(sim.history().is_empty());
        assert_eq!(sim.current(), sim.initial());
        sim.step();
        sim.step();
        assert_eq!(sim.current(), &second);
    }

    /// Spins for a fixed sub-microsecond interval, then applies FTCS.
    struct SpinStepper(Duration);

    impl Stepper for SpinStepper {
        fn name(&self) -> &str {
            "spin"
        }

        fn step(&self, prev: &FieldState, next: InteriorMut<'_>, params: &SimulationParams) {
            let start = Instant::now();
            while start.elapsed() < self.0 {
                std::hint::spin_loop();
            }
            Ftcs.step(prev, next, params);
        }
    }

    #[test]
    fn sub_microsecond_steps_accumulate_into_total_time() {
        let nt = 4000;
        let spin = Duration::from_nanos(500);
        let sim = Simulation::with_stepper(&config_with_steps(nt), SpinStepper(spin)).unwrap();
        let out = sim.run();

        // Every step lasts at least `spin`, so the sum is at least nt * spin.
        let floor_us = (spin * nt as u32).as_micros() as u64;
        assert_eq!(floor_us, 2000);
        assert!(
            out.metrics.total_us >= floor_us,
            "total_us {} below the {floor_us} us floor",
            out.metrics.total_us
        );
        assert!(out.metrics.mean_step_us() >= 0.5);
    }

    #[test]
    fn debug_names_stepper() {
        let sim = Simulation::new(&config_with_steps(1)).unwrap();
        let dbg = format!("{sim:?}");
        assert!(dbg.contains("Ftcs"));
        assert!(dbg.contains("nt: 1"));
    }
}
