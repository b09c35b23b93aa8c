//! Backward pass: latest start and finish times.

use rust_decimal::Decimal;

use crate::forward_pass::ForwardPassResult;
use crate::graph::TaskGraph;
use crate::models::TaskTiming;
use crate::{log_changes, log_checks};

/// Compute latest start/finish for every task in reverse topological order.
///
/// Every sink finishes at the project duration, including sinks whose own
/// early finish is smaller; they inherit the gap as slack. Other tasks must
/// finish by the earliest latest-start among their successors.
///
/// Returns the forward timings with the latest fields filled in.
pub fn backward_pass(
    graph: &TaskGraph,
    forward: &ForwardPassResult,
    verbosity: u8,
) -> Vec<TaskTiming> {
    let mut timings = forward.timings.clone();
    let project_duration = forward.project_duration;

    for &task_id in graph.topological_order().iter().rev() {
        let task = graph.task(task_id);

        // Sinks have no successors, so the fallback seeds them
        let latest_finish = task
            .successors
            .iter()
            .map(|&s| timings[s as usize].latest_start)
            .min()
            .unwrap_or(project_duration);

        let timing = &mut timings[task_id as usize];
        timing.latest_finish = latest_finish;
        timing.latest_start = latest_finish - task.duration;

        log_checks!(
            verbosity,
            "[backward] {}: LS={} LF={}",
            task.id,
            timing.latest_start,
            timing.latest_finish
        );
    }

    log_changes!(
        verbosity,
        "[backward] seeded {} sinks at {}",
        graph.tasks().iter().filter(|t| t.is_sink()).count(),
        project_duration
    );

    timings
}
