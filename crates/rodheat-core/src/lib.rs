//! Core types for the rodheat simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data model shared by the stepper and the driving loop: the
//! temperature [`FieldState`], the immutable [`SimulationParams`], the
//! [`RodGrid`] discretization, the [`RodConfig`] input bundle, and the
//! [`ConfigError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod field;
pub mod grid;
pub mod params;

pub use config::{RodConfig, StepCount};
pub use error::ConfigError;
pub use field::{FieldState, InteriorMut};
pub use grid::RodGrid;
pub use params::{Boundary, SimulationParams};
