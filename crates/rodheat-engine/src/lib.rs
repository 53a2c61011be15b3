//! Driving loop for rodheat simulations.
//!
//! [`Simulation`] owns the current field, a scratch buffer, and the
//! [`History`]. Each step invokes the configured
//! [`Stepper`](rodheat_stepper::Stepper), re-pins the boundaries, and appends
//! a copy of the new state. [`run()`] is the one-call entry point; a
//! [`RunOutput`] bundles everything an external renderer needs.
//! [`BatchedRuns`] drives several independent configurations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batched;
pub mod history;
pub mod metrics;
pub mod simulation;

pub use batched::{BatchError, BatchedRuns};
pub use history::History;
pub use metrics::RunMetrics;
pub use simulation::{run, RunOutput, Simulation};
