//! Benchmark profiles for the rodheat simulation workspace.
//!
//! - [`reference_profile`]: the 20-point reference rod, 1000 steps
//! - [`fine_profile`]: a 1001-point rod at the stability limit
//! - [`stress_profile`]: 100 001 points for per-step throughput

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rodheat_core::{RodConfig, StepCount};
use rodheat_stepper::Ftcs;

/// The reference rod (20 points, 1000 steps).
pub fn reference_profile() -> RodConfig {
    RodConfig::default()
}

/// 1001 points on a 1 m rod with `dt` at the stability limit.
pub fn fine_profile(nt: usize) -> RodConfig {
    profile(1001, nt)
}

/// 100 001 points on a 1 m rod with `dt` at the stability limit.
pub fn stress_profile(nt: usize) -> RodConfig {
    profile(100_001, nt)
}

fn profile(points: usize, nt: usize) -> RodConfig {
    let base = RodConfig::default();
    let dx = base.length / (points - 1) as f64;
    RodConfig {
        points,
        dt: Ftcs::max_stable_dt(dx, base.alpha),
        steps: StepCount::Steps(nt),
        ..base
    }
}
