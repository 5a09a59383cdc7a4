//! # sleepwalk-core
//!
//! Core abstractions for the sleepwalk workload simulator.
//!
//! The simulator never talks to the clock, the random source or the task
//! spawner directly. It goes through provider traits so the same workload
//! runs against real wall-clock time in production and against a logical
//! clock with a seeded generator under test.
//!
//! ## Provider Traits
//!
//! - [`TimeProvider`]: Sleep and elapsed-time queries
//! - [`RandomProvider`]: Per-instance random number generation
//! - [`TaskProvider`]: Task spawning on the current thread
//! - [`Providers`]: Bundle of the three above
//!
//! ## Errors
//!
//! All fallible operations return [`WorkloadResult`], carrying a
//! [`WorkloadError`].

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

mod error;
mod providers;
mod random;
mod task;
mod time;

// Error exports
pub use error::{WorkloadError, WorkloadResult};

// Provider trait exports
pub use providers::{Providers, TokioProviders};
pub use random::{RandomProvider, TokioRandomProvider};
pub use task::{TaskProvider, TokioTaskProvider};
pub use time::{TimeError, TimeProvider, TokioTimeProvider};
