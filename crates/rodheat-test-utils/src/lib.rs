//! Test utilities and mock steppers for rodheat development.
//!
//! Provides standard [`RodConfig`](rodheat_core::RodConfig) fixtures,
//! mock [`Stepper`](rodheat_stepper::Stepper) implementations, and
//! assertion helpers over recorded field sequences.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    assert_bit_identical, linear_profile, max_deviation, reference_config, single_point_config,
    stable_config, unstable_config, CountingStepper, FrozenStepper,
};
