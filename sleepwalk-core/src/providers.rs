//! Provider bundle trait for simplified type parameters.
//!
//! Instead of carrying three separate type parameters, code that needs
//! time, randomness and task spawning takes a single `P: Providers`.

use crate::{
    RandomProvider, TaskProvider, TimeProvider, TokioRandomProvider, TokioTaskProvider,
    TokioTimeProvider,
};

/// Bundle of all provider types for a runtime environment.
///
/// ## Implementations
///
/// - [`TokioProviders`]: Real time, entropy-seeded or fixed-seed randomness
/// - `SimProviders` (in sleepwalk): Logical time for deterministic testing
pub trait Providers: Clone + 'static {
    /// Time provider type for sleep and elapsed-time queries.
    type Time: TimeProvider + Clone + 'static;

    /// Task provider type for spawning local tasks.
    type Task: TaskProvider + Clone + 'static;

    /// Random provider type for sleep sampling.
    type Random: RandomProvider + Clone + 'static;

    /// Get the time provider instance.
    fn time(&self) -> &Self::Time;

    /// Get the task provider instance.
    fn task(&self) -> &Self::Task;

    /// Get the random provider instance.
    fn random(&self) -> &Self::Random;
}

/// Production providers using the Tokio runtime.
///
/// ```rust
/// use sleepwalk_core::{Providers, TimeProvider, TokioProviders};
///
/// let providers = TokioProviders::new();
/// assert!(providers.time().now() < std::time::Duration::from_secs(1));
/// ```
#[derive(Clone, Debug)]
pub struct TokioProviders {
    time: TokioTimeProvider,
    task: TokioTaskProvider,
    random: TokioRandomProvider,
}

impl TokioProviders {
    /// Create a production bundle with an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_random(TokioRandomProvider::new())
    }

    /// Create a production bundle whose sleep sequence is fixed by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_random(TokioRandomProvider::with_seed(seed))
    }

    fn with_random(random: TokioRandomProvider) -> Self {
        Self {
            time: TokioTimeProvider::new(),
            task: TokioTaskProvider,
            random,
        }
    }
}

impl Default for TokioProviders {
    fn default() -> Self {
        Self::new()
    }
}

impl Providers for TokioProviders {
    type Time = TokioTimeProvider;
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
