//! Logical time provider implementation.

use async_trait::async_trait;
use std::time::Duration;

use sleepwalk_core::{TimeError, TimeProvider};

use crate::sim::WeakSimClock;

/// Time provider whose sleeps advance a [`SimClock`](crate::SimClock)
/// instead of waiting.
#[derive(Debug, Clone)]
pub struct SimTimeProvider {
    clock: WeakSimClock,
}

impl SimTimeProvider {
    /// Create a provider driving `clock`.
    pub fn new(clock: WeakSimClock) -> Self {
        Self { clock }
    }
}

#[async_trait(?Send)]
impl TimeProvider for SimTimeProvider {
    async fn sleep(&self, duration: Duration) -> Result<(), TimeError> {
        let now = self.clock.advance(duration)?;
        tracing::trace!(?duration, ?now, "Logical clock advanced");
        // Still a suspension point, like a real sleep.
        tokio::task::yield_now().await;
        Ok(())
    }

    fn now(&self) -> Duration {
        self.clock.now().unwrap_or(Duration::ZERO)
    }
}
