//! Stepper trait and the explicit update rule for rodheat simulations.
//!
//! A [`Stepper`] maps the previous [`FieldState`](rodheat_core::FieldState)
//! to the interior of the next one. [`Ftcs`] is the forward-time,
//! centered-space scheme; [`ftcs::step`] is the same rule as a pure
//! function returning a fresh state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ftcs;
pub mod stepper;

pub use ftcs::Ftcs;
pub use stepper::Stepper;
