//! Workload simulator binary.
//!
//! Counts down from `--steps` to one, sleeping a random duration per step
//! and printing `Step <N> completed.` on stdout. With `--mode threaded` the
//! countdown runs on a spawned task and `Workload simulation completed.`
//! follows once it has been joined.
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see per-step sleeps.
//!
//! # Usage
//!
//! ```bash
//! sleepwalk
//! sleepwalk --mode threaded --steps 3 --seed 42
//! ```

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use sleepwalk::{
    run_workload, ExecutionMode, SimulatorConfig, SleepRange, StepCount, StepOutput,
    WorkloadResult,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sleepwalk")]
#[command(about = "Simulate a workload of randomly delayed steps", long_about = None)]
struct Args {
    /// Number of steps to count down from
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    steps: i64,

    /// Run the countdown inline or on a spawned task
    #[arg(long, value_enum, default_value_t = Mode::Inline)]
    mode: Mode,

    /// Seed for a reproducible sleep sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Shortest per-step sleep, in milliseconds
    #[arg(long, default_value_t = SleepRange::DEFAULT_MIN_MS)]
    min_sleep_ms: u64,

    /// Longest per-step sleep, in milliseconds
    #[arg(long, default_value_t = SleepRange::DEFAULT_MAX_MS)]
    max_sleep_ms: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Inline,
    Threaded,
}

impl From<Mode> for ExecutionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Inline => ExecutionMode::Inline,
            Mode::Threaded => ExecutionMode::Threaded,
        }
    }
}

impl Args {
    fn into_config(self) -> WorkloadResult<SimulatorConfig> {
        Ok(SimulatorConfig {
            steps: StepCount::try_from(self.steps)?,
            sleep_range: SleepRange::from_millis(self.min_sleep_ms, self.max_sleep_ms)?,
            mode: self.mode.into(),
            seed: self.seed,
        })
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::from(2);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start runtime");
            return ExitCode::FAILURE;
        }
    };

    // Local set for the !Send workload task
    let local = tokio::task::LocalSet::new();
    let result = local.block_on(
        &runtime,
        run_workload(&config, config.tokio_providers(), StepOutput::stdout()),
    );

    match result {
        Ok(report) => {
            tracing::info!("\n{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Workload failed");
            ExitCode::FAILURE
        }
    }
}
