//! Run configuration.
//!
//! Raw values coming from the command line are checked here, at the
//! boundary. Past this module a negative step count or an inverted sleep
//! range cannot be represented.

use std::fmt;
use std::time::Duration;

use sleepwalk_core::{RandomProvider, TokioProviders, WorkloadError, WorkloadResult};

use crate::runner::ExecutionMode;

/// Number of countdown steps in a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepCount(u64);

impl StepCount {
    /// Step count used when none is configured.
    pub const DEFAULT: StepCount = StepCount(10);

    /// Create a step count.
    pub fn new(steps: u64) -> Self {
        Self(steps)
    }

    /// The raw count.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Counter values visited by a run, from the count down to one.
    ///
    /// Empty for a count of zero.
    pub fn countdown(self) -> impl Iterator<Item = u64> {
        (1..=self.0).rev()
    }
}

impl Default for StepCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for StepCount {
    type Error = WorkloadError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(StepCount)
            .map_err(|_| WorkloadError::InvalidStepCount(value))
    }
}

impl fmt::Display for StepCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed interval of sleep durations, in whole milliseconds.
///
/// Both bounds are reachable when sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepRange {
    min_ms: u64,
    max_ms: u64,
}

impl SleepRange {
    /// Default lower bound: 0.5s.
    pub const DEFAULT_MIN_MS: u64 = 500;
    /// Default upper bound: 1.5s.
    pub const DEFAULT_MAX_MS: u64 = 1500;

    /// Create a range from millisecond bounds.
    ///
    /// Fails with [`WorkloadError::InvalidSleepRange`] when `min_ms > max_ms`.
    pub fn from_millis(min_ms: u64, max_ms: u64) -> WorkloadResult<Self> {
        if min_ms > max_ms {
            return Err(WorkloadError::InvalidSleepRange { min_ms, max_ms });
        }
        Ok(Self { min_ms, max_ms })
    }

    /// Shortest possible sleep.
    pub fn min(&self) -> Duration {
        Duration::from_millis(self.min_ms)
    }

    /// Longest possible sleep.
    pub fn max(&self) -> Duration {
        Duration::from_millis(self.max_ms)
    }

    /// Whether `duration` lies inside the closed range.
    pub fn contains(&self, duration: Duration) -> bool {
        self.min() <= duration && duration <= self.max()
    }

    /// Draw one sleep duration uniformly from the range.
    pub fn sample<R: RandomProvider>(&self, random: &R) -> Duration {
        let millis = random.random_range_inclusive(self.min_ms..=self.max_ms);
        Duration::from_millis(millis)
    }
}

impl Default for SleepRange {
    fn default() -> Self {
        Self {
            min_ms: Self::DEFAULT_MIN_MS,
            max_ms: Self::DEFAULT_MAX_MS,
        }
    }
}

impl fmt::Display for SleepRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms..={}ms", self.min_ms, self.max_ms)
    }
}

/// Configuration for a single workload run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Number of countdown steps.
    pub steps: StepCount,
    /// Range each per-step sleep is drawn from.
    pub sleep_range: SleepRange,
    /// Inline or on a spawned task.
    pub mode: ExecutionMode,
    /// Fixed seed for the sleep sequence; entropy when `None`.
    pub seed: Option<u64>,
}

impl SimulatorConfig {
    /// Production providers honouring the configured seed.
    pub fn tokio_providers(&self) -> TokioProviders {
        match self.seed {
            Some(seed) => TokioProviders::with_seed(seed),
            None => TokioProviders::new(),
        }
    }
}
