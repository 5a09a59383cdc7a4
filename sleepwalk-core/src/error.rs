//! Error types shared across the workspace.

use thiserror::Error;

use crate::time::TimeError;

/// Errors that can occur while configuring or running a workload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkloadError {
    /// A step count was negative.
    #[error("invalid step count {0}: must be zero or greater")]
    InvalidStepCount(i64),

    /// The sleep range lower bound exceeds its upper bound.
    #[error("invalid sleep range: min {min_ms}ms is greater than max {max_ms}ms")]
    InvalidSleepRange {
        /// Lower bound in milliseconds
        min_ms: u64,
        /// Upper bound in milliseconds
        max_ms: u64,
    },

    /// Writing a step line to the output failed.
    #[error("output error: {0}")]
    Output(String),

    /// The time provider could not complete a sleep.
    #[error("time provider error: {0}")]
    Time(#[from] TimeError),

    /// The spawned workload task panicked or was aborted.
    #[error("workload task failed: {0}")]
    TaskFailed(String),
}

/// A type alias for `Result<T, WorkloadError>`.
pub type WorkloadResult<T> = Result<T, WorkloadError>;

impl From<std::io::Error> for WorkloadError {
    fn from(err: std::io::Error) -> Self {
        WorkloadError::Output(err.to_string())
    }
}
