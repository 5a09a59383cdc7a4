//! Time provider abstraction for logical and real time.
//!
//! This module provides a unified interface for the only two time
//! operations a workload needs: suspending for a duration and asking how
//! much time has passed.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during time operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// The clock backing the provider has been dropped.
    #[error("time provider shut down")]
    Shutdown,
    /// Advancing the clock would move it past [`Duration::MAX`].
    #[error("logical clock overflowed")]
    ClockOverflow,
}

/// Provider trait for time operations.
///
/// Implementations decide what a sleep means: a real timer for
/// [`TokioTimeProvider`], an instant clock advance for a logical clock.
#[async_trait(?Send)]
pub trait TimeProvider: Clone {
    /// Sleep for the specified duration.
    ///
    /// The caller is suspended until the duration has elapsed on this
    /// provider's clock.
    async fn sleep(&self, duration: Duration) -> Result<(), TimeError>;

    /// Time elapsed on this provider's clock since it was created.
    fn now(&self) -> Duration;
}

/// Real time provider using Tokio's time facilities.
#[derive(Debug, Clone)]
pub struct TokioTimeProvider {
    /// Start time for calculating elapsed duration
    start_time: std::time::Instant,
}

impl TokioTimeProvider {
    /// Create a new Tokio time provider.
    pub fn new() -> Self {
        Self {
            start_time: std::time::Instant::now(),
        }
    }
}

impl Default for TokioTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl TimeProvider for TokioTimeProvider {
    async fn sleep(&self, duration: Duration) -> Result<(), TimeError> {
        tokio::time::sleep(duration).await;
        Ok(())
    }

    fn now(&self) -> Duration {
        self.start_time.elapsed()
    }
}
