//! The countdown workload.

use std::io::Write;

use tracing::instrument;

use sleepwalk_core::{Providers, TimeProvider, WorkloadResult};

use crate::config::{SleepRange, StepCount};
use crate::output::StepOutput;
use crate::runner::StepMetrics;

/// Line emitted when `step` finishes.
pub fn step_line(step: u64) -> String {
    format!("Step {step} completed.")
}

/// Runs the countdown: one random sleep and one output line per step.
///
/// The simulator holds no state between runs; the step count is passed to
/// every [`simulate`](Self::simulate) call.
pub struct WorkloadSimulator<P, W> {
    providers: P,
    sleep_range: SleepRange,
    output: StepOutput<W>,
}

impl<P: Providers, W: Write> WorkloadSimulator<P, W> {
    /// Create a simulator with the default 0.5s–1.5s sleep range.
    pub fn new(providers: P, output: StepOutput<W>) -> Self {
        Self {
            providers,
            sleep_range: SleepRange::default(),
            output,
        }
    }

    /// Replace the sleep range.
    pub fn with_sleep_range(mut self, sleep_range: SleepRange) -> Self {
        self.sleep_range = sleep_range;
        self
    }

    /// Count down from `steps` to 1.
    ///
    /// For each counter value: draw a sleep from the range, sleep on the
    /// time provider, then write `Step <i> completed.`. A count of zero
    /// writes nothing. Stops at the first sleep or write failure.
    #[instrument(skip_all, fields(steps = steps.get()))]
    pub async fn simulate(&self, steps: StepCount) -> WorkloadResult<StepMetrics> {
        let time = self.providers.time();
        let started = time.now();
        let mut sleeps = Vec::new();

        for step in steps.countdown() {
            let sleep = self.sleep_range.sample(self.providers.random());
            time.sleep(sleep).await?;
            self.output.write_line(&step_line(step))?;

            tracing::debug!(step, sleep_ms = sleep.as_millis() as u64, "Step completed");
            sleeps.push(sleep);
        }

        Ok(StepMetrics {
            steps_completed: sleeps.len() as u64,
            sleeps,
            elapsed: time.now().saturating_sub(started),
        })
    }
}
