//! Provider implementations for deterministic runs.
//!
//! Production providers live in `sleepwalk-core`; this module adds the
//! logical-time variants used by tests and seeded replays.

mod sim_providers;
mod time;

pub use sim_providers::SimProviders;
pub use time::SimTimeProvider;
