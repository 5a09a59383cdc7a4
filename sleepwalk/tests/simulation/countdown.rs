use std::time::Duration;

use sleepwalk::{ExecutionMode, SleepRange};

use crate::common::{run_simulated, step_lines};

#[test]
fn test_three_steps_in_descending_order() {
    let (_, lines, _) = run_simulated(3, ExecutionMode::Inline, 1);

    assert_eq!(
        lines,
        vec!["Step 3 completed.", "Step 2 completed.", "Step 1 completed."]
    );
}

#[test]
fn test_zero_steps_emit_nothing() {
    for mode in [ExecutionMode::Inline, ExecutionMode::Threaded] {
        let (report, lines, clock) = run_simulated(0, mode, 1);

        assert_eq!(report.metrics.steps_completed, 0);
        assert_eq!(clock.now(), Duration::ZERO);
        let step_count = lines.iter().filter(|l| l.starts_with("Step ")).count();
        assert_eq!(step_count, 0, "mode {mode}");
    }
}

#[test]
fn test_exactly_one_line_per_step() {
    for steps in [1, 2, 7, 10, 64] {
        let (report, lines, clock) = run_simulated(steps, ExecutionMode::Inline, steps);

        assert_eq!(lines, step_lines(steps));
        assert_eq!(report.metrics.steps_completed, steps);
        assert_eq!(clock.sleep_count(), steps);
    }
}

#[test]
fn test_every_sleep_within_half_to_one_and_a_half_seconds() {
    let range = SleepRange::default();
    let (report, _, _) = run_simulated(500, ExecutionMode::Inline, 17);

    for sleep in &report.metrics.sleeps {
        assert!(
            range.contains(*sleep),
            "sleep {sleep:?} outside 500ms..=1500ms"
        );
    }
}

#[test]
fn test_total_time_within_bounds() {
    for steps in [1u64, 5, 10, 100] {
        let (report, _, clock) = run_simulated(steps, ExecutionMode::Inline, 1000 + steps);
        let total = clock.now();

        assert!(total >= Duration::from_millis(500) * steps as u32);
        assert!(total <= Duration::from_millis(1500) * steps as u32);
        assert_eq!(total, report.metrics.total_slept());
    }
}

#[test]
fn test_mean_sleep_close_to_one_second() {
    let (report, _, _) = run_simulated(2_000, ExecutionMode::Inline, 5);
    let mean = report.metrics.average_sleep();

    assert!(
        mean > Duration::from_millis(950) && mean < Duration::from_millis(1050),
        "mean sleep {mean:?}"
    );
}
