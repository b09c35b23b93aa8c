//! Task graph construction and validation.
//!
//! Turns raw records into a [`TaskGraph`]: dense task ids, a derived
//! successor index, and a topological order computed with Kahn's algorithm.
//! A `TaskGraph` can only be obtained through [`TaskGraph::build`], so the
//! passes downstream never re-check references or cycles.

use std::collections::VecDeque;
use std::str::FromStr;

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;

use crate::backward_pass::backward_pass;
use crate::config::AnalysisConfig;
use crate::critical_path::extract_critical_path;
use crate::error::CpmError;
use crate::forward_pass::forward_pass;
use crate::interner::{TaskId, TaskIdInterner};
use crate::models::{ScheduleResult, Task, TaskRecord};
use crate::{log_changes, log_debug};

/// A validated, acyclic task dependency graph.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskGraph {
    index: TaskIdInterner,
    tasks: Vec<Task>,
    topo_order: Vec<TaskId>,
}

fn invalid_duration(task: &str, raw: &str) -> CpmError {
    CpmError::InvalidDuration {
        task: task.to_string(),
        value: raw.to_string(),
    }
}

/// Parse a raw duration cell into a non-negative decimal.
///
/// Plain decimal notation only; `NaN` and `inf` are rejected.
fn parse_duration(task: &str, raw: &str) -> Result<Decimal, CpmError> {
    let value = Decimal::from_str(raw.trim()).map_err(|_| invalid_duration(task, raw))?;
    if value < Decimal::ZERO {
        return Err(invalid_duration(task, raw));
    }
    // Also turns -0 into 0 so it never leaks into reports
    Ok(value.normalize())
}

/// Split a comma-separated predecessor cell into trimmed, non-empty names.
fn split_predecessors(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

impl TaskGraph {
    /// Build and validate a graph from raw records.
    ///
    /// Checks run in this order, each over the records in input order:
    /// 1. identifiers and durations (`MissingTaskIdentifier`,
    ///    `InvalidDuration`, `DuplicateTaskIdentifier`)
    /// 2. predecessor references (`UnknownPredecessor`)
    /// 3. acyclicity (`CyclicDependency`)
    ///
    /// The sum of all durations must fit in a [`Decimal`]; every start and
    /// finish time is bounded by it, so the passes never overflow.
    pub fn build(records: &[TaskRecord], verbosity: u8) -> Result<Self, CpmError> {
        let mut index = TaskIdInterner::with_capacity(records.len());
        let mut tasks: Vec<Task> = Vec::with_capacity(records.len());
        let mut total = Decimal::ZERO;

        for (row, record) in records.iter().enumerate() {
            let name = record.task.trim();
            if name.is_empty() {
                return Err(CpmError::MissingTaskIdentifier { row: row + 1 });
            }
            let duration = parse_duration(name, &record.duration)?;
            total = total
                .checked_add(duration)
                .ok_or_else(|| invalid_duration(name, &record.duration))?;
            if index.insert_new(name).is_none() {
                return Err(CpmError::DuplicateTaskIdentifier {
                    task: name.to_string(),
                });
            }
            tasks.push(Task {
                id: name.to_string(),
                duration,
                predecessors: Vec::new(),
                successors: Vec::new(),
            });
        }

        let mut seen: FxHashSet<TaskId> = FxHashSet::default();
        for (idx, record) in records.iter().enumerate() {
            seen.clear();
            for pred_name in split_predecessors(&record.predecessors) {
                let pred = index
                    .get(pred_name)
                    .ok_or_else(|| CpmError::UnknownPredecessor {
                        task: tasks[idx].id.clone(),
                        predecessor: pred_name.to_string(),
                    })?;
                if seen.insert(pred) {
                    tasks[idx].predecessors.push(pred);
                }
            }
        }

        // Successors are derived once here and never edited afterwards
        for idx in 0..tasks.len() {
            for p in 0..tasks[idx].predecessors.len() {
                let pred = tasks[idx].predecessors[p] as usize;
                tasks[pred].successors.push(idx as TaskId);
            }
        }

        let topo_order = topological_sort(&tasks, verbosity)?;

        log_changes!(
            verbosity,
            "[graph] built {} tasks ({} sources, {} sinks)",
            tasks.len(),
            tasks.iter().filter(|t| t.is_source()).count(),
            tasks.iter().filter(|t| t.is_sink()).count()
        );

        Ok(Self {
            index,
            tasks,
            topo_order,
        })
    }

    /// Run the forward pass, backward pass, and critical path extraction.
    ///
    /// The graph is not modified, so calling this repeatedly yields
    /// identical results.
    pub fn schedule(&self, config: &AnalysisConfig) -> ScheduleResult {
        let forward = forward_pass(self, config.verbosity);
        let timings = backward_pass(self, &forward, config.verbosity);
        extract_critical_path(self, &timings, forward.project_duration, config)
    }

    /// All tasks, indexed by [`TaskId`] (input order).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// A task by id.
    #[inline]
    pub fn task(&self, id: TaskId) -> &Task {
        &self.tasks[id as usize]
    }

    /// Look up a task id by identifier.
    pub fn get_id(&self, name: &str) -> Option<TaskId> {
        self.index.get(name)
    }

    /// Identifier of a task id.
    pub fn name(&self, id: TaskId) -> &str {
        self.index.resolve(id).unwrap_or_default()
    }

    /// Task ids with every predecessor before its successors.
    pub fn topological_order(&self) -> &[TaskId] {
        &self.topo_order
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Topological sort using Kahn's algorithm.
///
/// Sources are seeded in input order. If the worklist drains before every
/// task is emitted, the leftovers contain a cycle, which is reported by name.
fn topological_sort(tasks: &[Task], verbosity: u8) -> Result<Vec<TaskId>, CpmError> {
    let mut in_degree: Vec<usize> = tasks.iter().map(|t| t.predecessors.len()).collect();

    let mut queue: VecDeque<TaskId> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, &degree)| degree == 0)
        .map(|(idx, _)| idx as TaskId)
        .collect();

    log_debug!(verbosity, "[graph] initial worklist: {:?}", queue);

    let mut result: Vec<TaskId> = Vec::with_capacity(tasks.len());

    while let Some(task_id) = queue.pop_front() {
        result.push(task_id);

        for &succ in &tasks[task_id as usize].successors {
            let degree = &mut in_degree[succ as usize];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(succ);
            }
        }
    }

    if result.len() != tasks.len() {
        return Err(CpmError::CyclicDependency {
            cycle: find_cycle(tasks, &in_degree),
        });
    }

    Ok(result)
}

/// Name one cycle among the tasks Kahn's algorithm could not emit.
///
/// Every unemitted task still has an unemitted predecessor, so walking
/// predecessors from any of them must revisit a task. The walk is reversed
/// so the cycle reads in dependency order and ends where it started.
fn find_cycle(tasks: &[Task], in_degree: &[usize]) -> Vec<String> {
    let Some(start) = in_degree.iter().position(|&d| d > 0) else {
        return Vec::new();
    };

    let mut position: Vec<Option<usize>> = vec![None; tasks.len()];
    let mut walk: Vec<usize> = Vec::new();
    let mut current = start;

    loop {
        if let Some(pos) = position[current] {
            let mut cycle: Vec<String> = walk[pos..]
                .iter()
                .rev()
                .map(|&idx| tasks[idx].id.clone())
                .collect();
            cycle.insert(0, tasks[current].id.clone());
            return cycle;
        }
        position[current] = Some(walk.len());
        walk.push(current);

        match tasks[current]
            .predecessors
            .iter()
            .map(|&p| p as usize)
            .find(|&p| in_degree[p] > 0)
        {
            Some(next) => current = next,
            None => return vec![tasks[current].id.clone()],
        }
    }
}
