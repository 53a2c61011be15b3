//! rodheat: explicit finite-difference simulation of heat conduction along a rod.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! rodheat sub-crates. For most users, adding `rodheat` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rodheat::prelude::*;
//!
//! // 1 m rod, 20 points, held at 100 °C and 50 °C, starting at 25 °C.
//! let config = RodConfig::default();
//! let output = rodheat::run(&config).unwrap();
//!
//! assert_eq!(output.history.len(), 1000);
//! for state in &output.history {
//!     assert_eq!(state.left(), 100.0);
//!     assert_eq!(state.right(), 50.0);
//! }
//!
//! // Hand the profiles to a renderer of your choice.
//! for k in output.history.quarter_marks() {
//!     let t = output.history.elapsed(k).unwrap();
//!     let profile = output.history.get(k).unwrap();
//!     assert_eq!(profile.len(), output.positions.len());
//!     assert!(t > 0.0);
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rodheat-core` | Field state, parameters, grid, config, errors |
//! | [`stepper`] | `rodheat-stepper` | `Stepper` trait and the FTCS rule |
//! | [`engine`] | `rodheat-engine` | Driving loop, history, metrics, batches |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data model (`rodheat-core`).
///
/// Contains [`types::FieldState`], [`types::SimulationParams`],
/// [`types::RodGrid`], [`types::RodConfig`], and [`types::ConfigError`].
pub use rodheat_core as types;

/// Stepper trait and update rule (`rodheat-stepper`).
///
/// The [`stepper::Stepper`] trait is the extension point for alternative
/// update rules; [`stepper::Ftcs`] is the explicit scheme.
pub use rodheat_stepper as stepper;

/// Driving loop (`rodheat-engine`).
///
/// [`engine::Simulation`] for step-by-step control, [`engine::run`] for a
/// single call, [`engine::BatchedRuns`] for several configurations.
pub use rodheat_engine as engine;

pub use rodheat_engine::run;

/// Common imports for typical rodheat usage.
///
/// ```rust
/// use rodheat::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use rodheat_core::{
        Boundary, ConfigError, FieldState, RodConfig, RodGrid, SimulationParams, StepCount,
    };

    // Stepper
    pub use rodheat_stepper::{Ftcs, Stepper};

    // Engine
    pub use rodheat_engine::{BatchedRuns, History, RunMetrics, RunOutput, Simulation};
}
