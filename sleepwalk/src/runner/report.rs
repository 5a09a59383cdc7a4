//! Run metrics and reporting.

use std::fmt;
use std::time::Duration;

use super::ExecutionMode;

/// Metrics collected by one countdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Number of step lines written
    pub steps_completed: u64,
    /// Sampled sleeps, in step order
    pub sleeps: Vec<Duration>,
    /// Time elapsed on the time provider's clock
    pub elapsed: Duration,
}

impl StepMetrics {
    /// Sum of all sampled sleeps, saturating at [`Duration::MAX`].
    pub fn total_slept(&self) -> Duration {
        self.sleeps
            .iter()
            .fold(Duration::ZERO, |total, sleep| total.saturating_add(*sleep))
    }

    /// Mean sampled sleep, zero when no steps ran.
    pub fn average_sleep(&self) -> Duration {
        if self.sleeps.is_empty() {
            return Duration::ZERO;
        }
        let total_nanos = self
            .sleeps
            .iter()
            .fold(0u128, |total, sleep| total.saturating_add(sleep.as_nanos()));
        let mean = total_nanos / self.sleeps.len() as u128;
        u64::try_from(mean)
            .map(Duration::from_nanos)
            .unwrap_or(Duration::MAX)
    }
}

/// Report of a finished workload run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Mode the workload ran in
    pub mode: ExecutionMode,
    /// Metrics from the countdown
    pub metrics: StepMetrics,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Workload Report ===")?;
        writeln!(f, "Mode: {}", self.mode)?;
        writeln!(f, "Steps Completed: {}", self.metrics.steps_completed)?;
        writeln!(f, "Total Slept: {:?}", self.metrics.total_slept())?;
        writeln!(f, "Average Sleep: {:?}", self.metrics.average_sleep())?;
        write!(f, "Elapsed: {:?}", self.metrics.elapsed)
    }
}
