//! Forward pass: earliest start and finish times.

use rust_decimal::Decimal;

use crate::graph::TaskGraph;
use crate::models::TaskTiming;
use crate::{log_changes, log_checks};

/// Result of the forward pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForwardPassResult {
    /// Timings indexed by task id; only the earliest fields are populated.
    pub timings: Vec<TaskTiming>,
    /// Maximum earliest finish over all sink tasks.
    pub project_duration: Decimal,
}

/// Compute earliest start/finish for every task in topological order.
///
/// ES is 0 for sources and the max EF over predecessors otherwise, so the
/// values do not depend on which valid topological order is used.
pub fn forward_pass(graph: &TaskGraph, verbosity: u8) -> ForwardPassResult {
    let mut timings = vec![TaskTiming::default(); graph.len()];

    for &task_id in graph.topological_order() {
        let task = graph.task(task_id);

        let earliest_start = task
            .predecessors
            .iter()
            .map(|&p| timings[p as usize].earliest_finish)
            .max()
            .unwrap_or(Decimal::ZERO);

        let timing = &mut timings[task_id as usize];
        timing.earliest_start = earliest_start;
        timing.earliest_finish = earliest_start + task.duration;

        log_checks!(
            verbosity,
            "[forward] {}: ES={} EF={}",
            task.id,
            timing.earliest_start,
            timing.earliest_finish
        );
    }

    let project_duration = graph
        .tasks()
        .iter()
        .zip(&timings)
        .filter(|(task, _)| task.is_sink())
        .map(|(_, timing)| timing.earliest_finish)
        .max()
        .unwrap_or(Decimal::ZERO);

    log_changes!(verbosity, "[forward] project duration {}", project_duration);

    ForwardPassResult {
        timings,
        project_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskRecord;

    fn make_graph(records: &[(&str, &str, &str)]) -> TaskGraph {
        let records: Vec<TaskRecord> = records
            .iter()
            .map(|&(id, d, p)| TaskRecord::new(id, d, p))
            .collect();
        TaskGraph::build(&records, 0).unwrap()
    }

    fn span(start: i64, finish: i64) -> (Decimal, Decimal) {
        (Decimal::from(start), Decimal::from(finish))
    }

    fn earliest(graph: &TaskGraph, result: &ForwardPassResult, name: &str) -> (Decimal, Decimal) {
        let t = result.timings[graph.get_id(name).unwrap() as usize];
        (t.earliest_start, t.earliest_finish)
    }

    #[test]
    fn test_chain() {
        let graph = make_graph(&[("a", "2", ""), ("b", "3", "a"), ("c", "4", "b")]);
        let result = forward_pass(&graph, 0);

        assert_eq!(earliest(&graph, &result, "a"), span(0, 2));
        assert_eq!(earliest(&graph, &result, "b"), span(2, 5));
        assert_eq!(earliest(&graph, &result, "c"), span(5, 9));
        assert_eq!(result.project_duration, Decimal::from(9));
    }

    #[test]
    fn test_start_is_max_of_predecessor_finishes() {
        let graph = make_graph(&[("a", "2", ""), ("b", "5", ""), ("t", "1", "a,b")]);
        let result = forward_pass(&graph, 0);

        assert_eq!(earliest(&graph, &result, "t"), span(5, 6));
        assert_eq!(result.project_duration, Decimal::from(6));
    }

    #[test]
    fn test_project_duration_over_multiple_sinks() {
        let graph = make_graph(&[("a", "2", ""), ("b", "7", "a"), ("c", "1", "a")]);
        let result = forward_pass(&graph, 0);
        assert_eq!(result.project_duration, Decimal::from(9));
    }

    #[test]
    fn test_zero_duration_milestone() {
        let graph = make_graph(&[("a", "4", ""), ("m", "0", "a"), ("b", "2", "m")]);
        let result = forward_pass(&graph, 0);
        assert_eq!(earliest(&graph, &result, "m"), span(4, 4));
        assert_eq!(earliest(&graph, &result, "b"), span(4, 6));
    }

    #[test]
    fn test_decimal_durations_add_exactly() {
        let graph = make_graph(&[("a", "0.1", ""), ("b", "0.2", "a")]);
        let result = forward_pass(&graph, 0);
        assert_eq!(
            earliest(&graph, &result, "b"),
            (Decimal::new(1, 1), Decimal::new(3, 1))
        );
        assert_eq!(result.project_duration, Decimal::new(3, 1));
    }

    #[test]
    fn test_empty_graph() {
        let graph = make_graph(&[]);
        let result = forward_pass(&graph, 0);
        assert!(result.timings.is_empty());
        assert_eq!(result.project_duration, Decimal::from(0));
    }
}
