use std::future::Future;

use sleepwalk::{
    run_workload, ExecutionMode, RunReport, SimClock, SimProviders, SimulatorConfig, StepCount,
    StepOutput,
};

pub fn block_on_local<F: Future>(future: F) -> F::Output {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("Failed to build runtime");
    tokio::task::LocalSet::new().block_on(&runtime, future)
}

pub fn step_lines(steps: u64) -> Vec<String> {
    (1..=steps)
        .rev()
        .map(|step| format!("Step {step} completed."))
        .collect()
}

/// Run on a fresh logical clock, returning the report, the output lines
/// and the clock.
pub fn run_simulated(
    steps: u64,
    mode: ExecutionMode,
    seed: u64,
) -> (RunReport, Vec<String>, SimClock) {
    let clock = SimClock::new();
    let output = StepOutput::in_memory();
    let config = SimulatorConfig {
        steps: StepCount::new(steps),
        mode,
        seed: Some(seed),
        ..SimulatorConfig::default()
    };

    let report = block_on_local(run_workload(
        &config,
        SimProviders::new(clock.downgrade(), seed),
        output.clone(),
    ))
    .expect("simulated run should succeed");

    (report, output.lines(), clock)
}
