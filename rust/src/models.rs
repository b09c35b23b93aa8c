//! Core data types for schedule analysis.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::interner::TaskId;

/// A raw task row as it arrives from the outside world.
///
/// Duration and predecessors are kept as text; the graph builder parses and
/// validates them so malformed values can be reported verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "Task")]
    pub task: String,
    #[serde(rename = "Duration")]
    pub duration: String,
    /// Comma-separated predecessor identifiers (may be empty).
    #[serde(rename = "Predecessors", default)]
    pub predecessors: String,
}

impl TaskRecord {
    pub fn new(
        task: impl Into<String>,
        duration: impl Into<String>,
        predecessors: impl Into<String>,
    ) -> Self {
        Self {
            task: task.into(),
            duration: duration.into(),
            predecessors: predecessors.into(),
        }
    }
}

/// A validated task node inside a [`crate::TaskGraph`].
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub id: String,
    pub duration: Decimal,
    /// Predecessor ids, deduplicated, in the order they were listed.
    pub predecessors: Vec<TaskId>,
    /// Successor ids (inverse of `predecessors`), in input order of the successor.
    pub successors: Vec<TaskId>,
}

impl Task {
    /// Task with no predecessors.
    pub fn is_source(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Task with no successors.
    pub fn is_sink(&self) -> bool {
        self.successors.is_empty()
    }
}

/// Per-task timing information produced by the forward and backward passes.
///
/// Times are exact decimals, so `latest_start - earliest_start` and
/// `latest_finish - earliest_finish` always agree.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TaskTiming {
    /// Earliest possible start time (from forward pass).
    pub earliest_start: Decimal,
    /// Earliest possible finish time (from forward pass).
    pub earliest_finish: Decimal,
    /// Latest allowable start time (from backward pass).
    pub latest_start: Decimal,
    /// Latest allowable finish time (from backward pass).
    pub latest_finish: Decimal,
}

impl TaskTiming {
    /// Slack = latest_start - earliest_start.
    pub fn slack(&self) -> Decimal {
        self.latest_start - self.earliest_start
    }
}

/// Computed schedule for a single task, in the shape reports consume.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskSchedule {
    pub task: String,
    pub duration: Decimal,
    pub predecessors: Vec<String>,
    pub successors: Vec<String>,
    pub es: Decimal,
    pub ef: Decimal,
    pub ls: Decimal,
    pub lf: Decimal,
    pub slack: Decimal,
    pub critical: bool,
}

/// Result of a full CPM analysis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScheduleResult {
    /// One entry per task, in input order.
    pub tasks: Vec<TaskSchedule>,
    /// Maximum early finish over all sink tasks (0 for an empty project).
    pub project_duration: Decimal,
    /// Identifiers of every zero-slack task, in input order.
    pub critical_tasks: Vec<String>,
    /// Every critical chain, each listed from a source to a sink.
    pub critical_paths: Vec<Vec<String>>,
}

impl ScheduleResult {
    /// Look up a task's schedule by identifier.
    pub fn get(&self, task: &str) -> Option<&TaskSchedule> {
        self.tasks.iter().find(|t| t.task == task)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_slack() {
        let timing = TaskTiming {
            earliest_start: Decimal::ZERO,
            earliest_finish: Decimal::from(6),
            latest_start: Decimal::from(2),
            latest_finish: Decimal::from(8),
        };
        assert_eq!(timing.slack(), Decimal::from(2));
        assert_eq!(TaskTiming::default().slack(), Decimal::ZERO);
    }

    #[test]
    fn test_timing_slack_is_exact_for_decimals() {
        // 0.1 + 0.2 finishing against a latest finish of 0.3
        let timing = TaskTiming {
            earliest_start: Decimal::new(1, 1),
            earliest_finish: Decimal::new(1, 1) + Decimal::new(2, 1),
            latest_start: Decimal::new(1, 1),
            latest_finish: Decimal::new(3, 1),
        };
        assert!(timing.slack().is_zero());
        assert_eq!(
            timing.slack(),
            timing.latest_finish - timing.earliest_finish
        );
    }

    #[test]
    fn test_source_and_sink() {
        let task = Task {
            id: "a".to_string(),
            duration: Decimal::ONE,
            predecessors: vec![],
            successors: vec![1],
        };
        assert!(task.is_source());
        assert!(!task.is_sink());
    }

    #[test]
    fn test_result_lookup() {
        let result = ScheduleResult {
            tasks: vec![TaskSchedule {
                task: "a".to_string(),
                duration: Decimal::from(3),
                predecessors: vec![],
                successors: vec![],
                es: Decimal::ZERO,
                ef: Decimal::from(3),
                ls: Decimal::ZERO,
                lf: Decimal::from(3),
                slack: Decimal::ZERO,
                critical: true,
            }],
            project_duration: Decimal::from(3),
            critical_tasks: vec!["a".to_string()],
            critical_paths: vec![vec!["a".to_string()]],
        };
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("a").map(|t| t.ef), Some(Decimal::from(3)));
        assert!(result.get("b").is_none());
        assert!(ScheduleResult::default().is_empty());
    }
}
