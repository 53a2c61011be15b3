//! Several independent simulations driven from one call.
//!
//! [`BatchedRuns`] owns N [`Simulation`]s built from N configurations and
//! runs each to completion. Runs share no state: every simulation owns its
//! own field buffers, history, and stepper, so the batch result equals
//! running each configuration on its own.
//!
//! Runs execute sequentially on the calling thread. Because `Simulation`
//! is `Send`, a caller that wants parallelism can split the batch and move
//! the pieces to worker threads.

use std::fmt;

use rodheat_core::{ConfigError, RodConfig};

use crate::simulation::{RunOutput, Simulation};

// ── Error type ──────────────────────────────────────────────────

/// Error from building a batch, annotated with the failing configuration.
#[derive(Debug, PartialEq)]
pub enum BatchError {
    /// Configuration `index` failed validation.
    Config {
        /// Index of the offending configuration (0-based).
        index: usize,
        /// The underlying validation error.
        error: ConfigError,
    },
    /// No configurations were supplied.
    Empty,
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::Config { index, error } => write!(f, "config {index}: {error}"),
            BatchError::Empty => write!(f, "batch has no configurations"),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Config { error, .. } => Some(error),
            BatchError::Empty => None,
        }
    }
}

// ── BatchedRuns ─────────────────────────────────────────────────

/// A batch of independent rod simulations.
pub struct BatchedRuns {
    sims: Vec<Simulation>,
}

impl BatchedRuns {
    /// Build one FTCS simulation per configuration.
    ///
    /// Fails on the first invalid configuration, reporting its index.
    pub fn new(configs: &[RodConfig]) -> Result<Self, BatchError> {
        if configs.is_empty() {
            return Err(BatchError::Empty);
        }
        let sims = configs
            .iter()
            .enumerate()
            .map(|(index, cfg)| {
                Simulation::new(cfg).map_err(|error| BatchError::Config { index, error })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { sims })
    }

    /// Build a batch from already constructed simulations.
    pub fn from_simulations(sims: Vec<Simulation>) -> Result<Self, BatchError> {
        if sims.is_empty() {
            return Err(BatchError::Empty);
        }
        Ok(Self { sims })
    }

    /// Number of simulations in the batch.
    pub fn len(&self) -> usize {
        self.sims.len()
    }

    /// Always returns `false`: construction rejects empty batches.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Read access to simulation `index`.
    pub fn get(&self, index: usize) -> Option<&Simulation> {
        self.sims.get(index)
    }

    /// Run every simulation to completion, in order.
    pub fn run(self) -> Vec<RunOutput> {
        self.sims.into_iter().map(Simulation::run).collect()
    }
}

impl fmt::Debug for BatchedRuns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchedRuns")
            .field("len", &self.sims.len())
            .finish()
    }
}
