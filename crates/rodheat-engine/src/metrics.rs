//! Run-level metrics for the driving loop.
//!
//! [`RunMetrics`] records how much work a run did and how long the loop
//! took. Timing is observational only and never feeds back into field
//! values, so histories stay bit-reproducible.

/// Counters and timings for one simulation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Number of steps executed.
    pub steps: usize,
    /// Wall-clock time spent in the stepper and history append, summed at
    /// full resolution and reported in whole microseconds.
    pub total_us: u64,
    /// Bytes of samples retained by the history.
    pub history_bytes: usize,
}

impl RunMetrics {
    /// Mean wall-clock time per step, in microseconds. Zero for an empty run.
    pub fn mean_step_us(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.total_us as f64 / self.steps as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = RunMetrics::default();
        assert_eq!(m.steps, 0);
        assert_eq!(m.total_us, 0);
        assert_eq!(m.history_bytes, 0);
        assert_eq!(m.mean_step_us(), 0.0);
    }

    #[test]
    fn mean_step_time() {
        let m = RunMetrics {
            steps: 4,
            total_us: 10,
            history_bytes: 0,
        };
        assert_eq!(m.mean_step_us(), 2.5);
    }
}
