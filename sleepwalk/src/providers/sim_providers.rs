//! Simulation providers bundle implementation.

use sleepwalk_core::{Providers, TokioRandomProvider, TokioTaskProvider};

use crate::sim::WeakSimClock;

use super::SimTimeProvider;

/// Provider bundle for deterministic runs.
///
/// - [`SimTimeProvider`] for logical time
/// - [`TokioTaskProvider`] for task spawning (same as production)
/// - [`TokioRandomProvider`] pinned to a seed
///
/// ```rust
/// use sleepwalk::{SimClock, SimProviders};
///
/// let clock = SimClock::new();
/// let providers = SimProviders::new(clock.downgrade(), 42);
/// ```
#[derive(Clone, Debug)]
pub struct SimProviders {
    time: SimTimeProvider,
    task: TokioTaskProvider,
    random: TokioRandomProvider,
}

impl SimProviders {
    /// Create a bundle driving `clock`, drawing sleeps from `seed`.
    pub fn new(clock: WeakSimClock, seed: u64) -> Self {
        Self {
            time: SimTimeProvider::new(clock),
            task: TokioTaskProvider,
            random: TokioRandomProvider::with_seed(seed),
        }
    }
}

impl Providers for SimProviders {
    type Time = SimTimeProvider;
    type Task = TokioTaskProvider;
    type Random = TokioRandomProvider;

    fn time(&self) -> &Self::Time {
        &self.time
    }

    fn task(&self) -> &Self::Task {
        &self.task
    }

    fn random(&self) -> &Self::Random {
        &self.random
    }
}
