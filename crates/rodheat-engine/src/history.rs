//! Append-only record of the field after every completed step.

use std::mem;
use std::slice;

use rodheat_core::FieldState;

/// Ordered sequence of field states, one per completed step.
///
/// Entry `k` is the state after `k + 1` stepper applications. Entries are
/// independent copies: advancing the simulation never alters a recorded
/// state. Only the driving loop appends; callers get read access.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    states: Vec<FieldState>,
    dt: f64,
}

impl History {
    pub(crate) fn with_capacity(capacity: usize, dt: f64) -> Self {
        Self {
            states: Vec::with_capacity(capacity),
            dt,
        }
    }

    pub(crate) fn push(&mut self, state: FieldState) {
        self.states.push(state);
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether no step has been recorded.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State after step `k + 1`, or `None` if not recorded.
    pub fn get(&self, k: usize) -> Option<&FieldState> {
        self.states.get(k)
    }

    /// Most recent state.
    pub fn last(&self) -> Option<&FieldState> {
        self.states.last()
    }

    /// All recorded states in step order.
    pub fn as_slice(&self) -> &[FieldState] {
        &self.states
    }

    /// Iterate recorded states in step order.
    pub fn iter(&self) -> slice::Iter<'_, FieldState> {
        self.states.iter()
    }

    /// Time step the history was recorded with.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Simulated time at entry `k`, i.e. `(k + 1) * dt`.
    pub fn elapsed(&self, k: usize) -> Option<f64> {
        (k < self.states.len()).then(|| (k + 1) as f64 * self.dt)
    }

    /// Temperature at grid index `i` across every recorded step.
    ///
    /// Returns `None` if `i` is outside the grid. An empty history yields
    /// an empty series.
    pub fn probe(&self, i: usize) -> Option<Vec<f64>> {
        self.states.iter().map(|s| s.get(i)).collect()
    }

    /// Representative entries for plotting: start, quarter, half, end.
    ///
    /// Returns `[0, nt/4, nt/2, nt-1]` with duplicates removed, or nothing
    /// for an empty history.
    pub fn quarter_marks(&self) -> Vec<usize> {
        let nt = self.states.len();
        if nt == 0 {
            return Vec::new();
        }
        let mut marks = vec![0, nt / 4, nt / 2, nt - 1];
        marks.dedup();
        marks
    }

    /// Bytes held by recorded samples.
    pub fn retained_bytes(&self) -> usize {
        self.states
            .iter()
            .map(|s| s.len() * mem::size_of::<f64>())
            .sum()
    }

    /// Consume into one `Vec<f64>` per step, for external renderers.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.states.into_iter().map(FieldState::into_vec).collect()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a FieldState;
    type IntoIter = slice::Iter<'a, FieldState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
