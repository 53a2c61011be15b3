//! The [`Stepper`] trait.

use rodheat_core::{FieldState, InteriorMut, SimulationParams};

/// A stateless operator advancing the temperature field by one time step.
///
/// # Contract
///
/// - `step()` MUST be deterministic: same inputs produce identical outputs.
/// - `&self`: steppers are stateless; all state lives in the field.
/// - `prev` is a read-only snapshot of the previous step. `next` is a
///   distinct buffer, so no interior update observes a partially updated
///   neighbour.
/// - Every element of `next` MUST be written; its prior contents are
///   unspecified (the loop reuses a scratch buffer).
/// - `next` covers the interior only. The driving loop re-pins the
///   boundary slots after every call.
/// - Stepping is infallible. Numerical blow-up is the caller's
///   responsibility and is not reported.
///
/// # Object safety
///
/// This trait is object-safe; the driving loop stores its stepper as
/// `Box<dyn Stepper>`.
///
/// # Examples
///
/// A stepper that freezes the field in place:
///
/// ```
/// use rodheat_core::{FieldState, InteriorMut, SimulationParams};
/// use rodheat_stepper::Stepper;
///
/// struct Frozen;
///
/// impl Stepper for Frozen {
///     fn name(&self) -> &str { "frozen" }
///
///     fn step(&self, prev: &FieldState, mut next: InteriorMut<'_>, _: &SimulationParams) {
///         next.copy_from_slice(prev.interior());
///     }
/// }
///
/// assert_eq!(Frozen.name(), "frozen");
/// ```
pub trait Stepper: Send + 'static {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Write the interior of the next state from `prev`.
    ///
    /// `next` has length `prev.len() - 2`; element `k` is grid index `k + 1`.
    fn step(&self, prev: &FieldState, next: InteriorMut<'_>, params: &SimulationParams);
}

impl<S: Stepper + ?Sized> Stepper for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn step(&self, prev: &FieldState, next: InteriorMut<'_>, params: &SimulationParams) {
        (**self).step(prev, next, params)
    }
}
