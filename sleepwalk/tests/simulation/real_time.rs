use std::time::{Duration, Instant};

use sleepwalk::{
    run_workload, ExecutionMode, SimulatorConfig, SleepRange, StepCount, StepOutput,
    TokioProviders,
};

use crate::common::{block_on_local, step_lines};

// Scheduler overshoot allowance for real timers.
const SLACK: Duration = Duration::from_millis(250);

#[test]
fn test_two_real_steps_take_between_one_and_three_seconds() {
    let output = StepOutput::in_memory();
    let config = SimulatorConfig {
        steps: StepCount::new(2),
        ..SimulatorConfig::default()
    };
    let wall = Instant::now();

    let report = block_on_local(run_workload(
        &config,
        TokioProviders::new(),
        output.clone(),
    ))
    .expect("real run should succeed");
    let elapsed = wall.elapsed();

    assert_eq!(output.lines(), step_lines(2));
    assert!(elapsed >= Duration::from_secs(1), "took {elapsed:?}");
    assert!(elapsed <= Duration::from_secs(3) + SLACK, "took {elapsed:?}");
    assert!(report.metrics.elapsed >= report.metrics.total_slept());
}

#[test]
fn test_threaded_real_run_with_short_sleeps() {
    let output = StepOutput::in_memory();
    let config = SimulatorConfig {
        steps: StepCount::new(3),
        sleep_range: SleepRange::from_millis(5, 15).expect("valid range"),
        mode: ExecutionMode::Threaded,
        seed: Some(9),
    };

    let report = block_on_local(run_workload(
        &config,
        config.tokio_providers(),
        output.clone(),
    ))
    .expect("real run should succeed");

    let mut expected = step_lines(3);
    expected.push("Workload simulation completed.".to_string());
    assert_eq!(output.lines(), expected);
    assert!(report
        .metrics
        .sleeps
        .iter()
        .all(|sleep| config.sleep_range.contains(*sleep)));
}
