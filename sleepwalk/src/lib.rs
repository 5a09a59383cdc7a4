//! # sleepwalk
//!
//! A workload simulator: count down from a step count to one, sleep a
//! random duration per step, and report each completed step on the output.
//!
//! ```text
//! Step 3 completed.
//! Step 2 completed.
//! Step 1 completed.
//! ```
//!
//! ## Execution modes
//!
//! | Mode | Where steps run | Extra output |
//! |------|-----------------|--------------|
//! | [`ExecutionMode::Inline`] | The caller's task | none |
//! | [`ExecutionMode::Threaded`] | One spawned task, joined by the caller | `Workload simulation completed.` |
//!
//! ## Time and randomness
//!
//! The simulator reaches the clock, the random source and the task spawner
//! through [`Providers`]. [`TokioProviders`] sleeps for real;
//! [`SimProviders`] advances a [`SimClock`] instantly and draws sleeps from
//! a seeded generator, so tests run in microseconds and replay exactly.
//!
//! ```ignore
//! use sleepwalk::{run_workload, SimulatorConfig, StepOutput, TokioProviders};
//!
//! let config = SimulatorConfig::default();
//! let report = run_workload(&config, TokioProviders::new(), StepOutput::stdout()).await?;
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

// Re-export core types for convenience
pub use sleepwalk_core::{
    Providers, RandomProvider, TaskProvider, TimeError, TimeProvider, TokioProviders,
    TokioRandomProvider, TokioTaskProvider, TokioTimeProvider, WorkloadError, WorkloadResult,
};

/// Step count, sleep range and run configuration.
pub mod config;

/// Line-oriented output sink shared between the runner and its task.
pub mod output;

/// Provider implementations for deterministic runs.
pub mod providers;

/// Execution modes and run reporting.
pub mod runner;

/// Logical clock backing the simulated time provider.
pub mod sim;

/// The countdown workload itself.
pub mod simulator;

pub use config::{SimulatorConfig, SleepRange, StepCount};
pub use output::StepOutput;
pub use providers::{SimProviders, SimTimeProvider};
pub use runner::{run_workload, ExecutionMode, RunReport, StepMetrics, COMPLETION_LINE};
pub use sim::{SimClock, WeakSimClock};
pub use simulator::{step_line, WorkloadSimulator};
