//! Slack computation and critical path extraction.
//!
//! A task is critical when its slack is zero (see
//! [`AnalysisConfig::slack_tolerance`]). Critical chains follow only "tight"
//! edges: predecessor -> successor where both are critical and the
//! predecessor's early finish equals the successor's early start. Every
//! chain runs from a critical task with no tight incoming edge to one with
//! no tight outgoing edge, and all such chains are reported.

use rust_decimal::Decimal;

use crate::config::AnalysisConfig;
use crate::graph::TaskGraph;
use crate::interner::TaskId;
use crate::models::{ScheduleResult, TaskSchedule, TaskTiming};
use crate::{log_changes, log_debug};

/// Build the final schedule from completed timings.
pub fn extract_critical_path(
    graph: &TaskGraph,
    timings: &[TaskTiming],
    project_duration: Decimal,
    config: &AnalysisConfig,
) -> ScheduleResult {
    let critical: Vec<bool> = timings
        .iter()
        .map(|t| config.is_zero(t.slack()))
        .collect();

    let tight_successors = tight_successors(graph, timings, &critical, config);
    let critical_paths = enumerate_chains(graph, &critical, &tight_successors, config);

    let names = |ids: &[TaskId]| -> Vec<String> {
        ids.iter().map(|&id| graph.name(id).to_string()).collect()
    };

    let tasks: Vec<TaskSchedule> = graph
        .tasks()
        .iter()
        .zip(timings)
        .zip(&critical)
        .map(|((task, timing), &is_critical)| TaskSchedule {
            task: task.id.clone(),
            duration: task.duration,
            predecessors: names(&task.predecessors[..]),
            successors: names(&task.successors[..]),
            es: timing.earliest_start,
            ef: timing.earliest_finish,
            ls: timing.latest_start,
            lf: timing.latest_finish,
            slack: timing.slack(),
            critical: is_critical,
        })
        .collect();

    let critical_tasks: Vec<String> = tasks
        .iter()
        .filter(|t| t.critical)
        .map(|t| t.task.clone())
        .collect();

    log_changes!(
        config.verbosity,
        "[critical] {} of {} tasks critical, {} chain(s)",
        critical_tasks.len(),
        tasks.len(),
        critical_paths.len()
    );

    ScheduleResult {
        tasks,
        project_duration,
        critical_tasks,
        critical_paths,
    }
}

/// For each critical task, its critical successors reached by a tight edge.
fn tight_successors(
    graph: &TaskGraph,
    timings: &[TaskTiming],
    critical: &[bool],
    config: &AnalysisConfig,
) -> Vec<Vec<TaskId>> {
    let mut result: Vec<Vec<TaskId>> = vec![Vec::new(); graph.len()];

    for (idx, task) in graph.tasks().iter().enumerate() {
        if !critical[idx] {
            continue;
        }
        let finish = timings[idx].earliest_finish;
        for &succ in &task.successors {
            let s = succ as usize;
            if critical[s] && config.is_zero(timings[s].earliest_start - finish) {
                result[idx].push(succ);
            } else if critical[s] {
                log_debug!(
                    config.verbosity,
                    "[critical] edge {} -> {} joins critical tasks but is not tight",
                    task.id,
                    graph.name(succ)
                );
            }
        }
    }

    result
}

/// Enumerate every chain along tight edges, depth first with an explicit stack.
///
/// Starts are visited in input order and successors in the order they were
/// derived, so the output is deterministic.
fn enumerate_chains(
    graph: &TaskGraph,
    critical: &[bool],
    tight_successors: &[Vec<TaskId>],
    config: &AnalysisConfig,
) -> Vec<Vec<String>> {
    let mut has_tight_predecessor = vec![false; graph.len()];
    for succs in tight_successors {
        for &s in succs {
            has_tight_predecessor[s as usize] = true;
        }
    }

    let limit = config.max_critical_paths.unwrap_or(usize::MAX);
    let mut chains: Vec<Vec<String>> = Vec::new();

    let starts = (0..graph.len()).filter(|&idx| critical[idx] && !has_tight_predecessor[idx]);

    for start in starts {
        // cursor[i] is the next tight successor of path[i] to try
        let mut path: Vec<usize> = vec![start];
        let mut cursor: Vec<usize> = vec![0];

        while let Some(&node) = path.last() {
            if chains.len() >= limit {
                return chains;
            }
            let depth = path.len() - 1;
            let succs = &tight_successors[node];
            if succs.is_empty() {
                let chain: Vec<String> = path
                    .iter()
                    .map(|&idx| graph.task(idx as TaskId).id.clone())
                    .collect();
                log_debug!(config.verbosity, "[critical] chain {}", chain.join(" -> "));
                chains.push(chain);
                path.pop();
                cursor.pop();
            } else if cursor[depth] < succs.len() {
                let succ = succs[cursor[depth]] as usize;
                cursor[depth] += 1;
                path.push(succ);
                cursor.push(0);
            } else {
                path.pop();
                cursor.pop();
            }
        }
    }

    chains
}
