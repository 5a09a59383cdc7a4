use sleepwalk::{ExecutionMode, COMPLETION_LINE};

use crate::common::{run_simulated, step_lines};

#[test]
fn test_single_step_threaded_prints_two_lines() {
    let (_, lines, _) = run_simulated(1, ExecutionMode::Threaded, 3);

    assert_eq!(
        lines,
        vec!["Step 1 completed.", "Workload simulation completed."]
    );
}

#[test]
fn test_completion_line_follows_all_steps() {
    for steps in [2, 10, 33] {
        let (report, lines, _) = run_simulated(steps, ExecutionMode::Threaded, steps);

        let mut expected = step_lines(steps);
        expected.push(COMPLETION_LINE.to_string());

        assert_eq!(lines, expected);
        assert_eq!(report.mode, ExecutionMode::Threaded);
    }
}

#[test]
fn test_threaded_with_zero_steps_prints_only_completion() {
    let (_, lines, _) = run_simulated(0, ExecutionMode::Threaded, 3);

    assert_eq!(lines, vec![COMPLETION_LINE]);
}

#[test]
fn test_modes_agree_on_step_lines() {
    let (_, inline, _) = run_simulated(6, ExecutionMode::Inline, 12);
    let (_, threaded, _) = run_simulated(6, ExecutionMode::Threaded, 12);

    assert_eq!(inline[..], threaded[..threaded.len() - 1]);
}
