//! Workload runner.
//!
//! Picks where the countdown runs, inline on the caller or on one spawned
//! task, and wraps the result in a [`RunReport`].

mod report;

use std::fmt;
use std::io::Write;

use tracing::instrument;

use sleepwalk_core::{Providers, TaskProvider, WorkloadError, WorkloadResult};

use crate::config::SimulatorConfig;
use crate::output::StepOutput;
use crate::simulator::WorkloadSimulator;

pub use report::{RunReport, StepMetrics};

/// Final line of a threaded run, written after the workload task is joined.
pub const COMPLETION_LINE: &str = "Workload simulation completed.";

/// Where the countdown runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// On the caller's task.
    #[default]
    Inline,
    /// On exactly one spawned task, awaited by the caller with no timeout.
    Threaded,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Inline => write!(f, "inline"),
            ExecutionMode::Threaded => write!(f, "threaded"),
        }
    }
}

/// Run one workload as described by `config`.
///
/// In [`ExecutionMode::Threaded`] the call must happen inside a
/// [`tokio::task::LocalSet`], and [`COMPLETION_LINE`] is written only after
/// the spawned task has finished successfully.
#[instrument(skip_all, fields(mode = %config.mode, steps = config.steps.get()))]
pub async fn run_workload<P, W>(
    config: &SimulatorConfig,
    providers: P,
    output: StepOutput<W>,
) -> WorkloadResult<RunReport>
where
    P: Providers,
    W: Write + 'static,
{
    tracing::info!(sleep_range = %config.sleep_range, "Starting workload");

    let simulator = WorkloadSimulator::new(providers.clone(), output.clone())
        .with_sleep_range(config.sleep_range);
    let steps = config.steps;

    let metrics = match config.mode {
        ExecutionMode::Inline => simulator.simulate(steps).await?,
        ExecutionMode::Threaded => {
            let handle = providers
                .task()
                .spawn_task("workload", async move { simulator.simulate(steps).await });
            let metrics = handle
                .await
                .map_err(|e| WorkloadError::TaskFailed(e.to_string()))??;
            output.write_line(COMPLETION_LINE)?;
            metrics
        }
    };

    let report = RunReport {
        mode: config.mode,
        metrics,
    };
    tracing::info!(
        steps_completed = report.metrics.steps_completed,
        elapsed = ?report.metrics.elapsed,
        "Workload finished"
    );
    Ok(report)
}
