use sleepwalk::ExecutionMode;

use crate::common::run_simulated;

#[test]
fn test_same_seed_same_sleeps() {
    let (first, first_lines, _) = run_simulated(20, ExecutionMode::Inline, 42);
    let (second, second_lines, _) = run_simulated(20, ExecutionMode::Inline, 42);

    assert_eq!(first.metrics.sleeps, second.metrics.sleeps);
    assert_eq!(first_lines, second_lines);
}

#[test]
fn test_seed_fixes_sleeps_across_modes() {
    let (inline, _, _) = run_simulated(8, ExecutionMode::Inline, 7);
    let (threaded, _, _) = run_simulated(8, ExecutionMode::Threaded, 7);

    assert_eq!(inline.metrics.sleeps, threaded.metrics.sleeps);
}

#[test]
fn test_different_seeds_change_timing_not_sequence() {
    let (first, first_lines, _) = run_simulated(20, ExecutionMode::Inline, 1);
    let (second, second_lines, _) = run_simulated(20, ExecutionMode::Inline, 2);

    assert_ne!(first.metrics.sleeps, second.metrics.sleeps);
    assert_eq!(first_lines, second_lines);
}
