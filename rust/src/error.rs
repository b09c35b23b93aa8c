//! Error types for schedule analysis.

use thiserror::Error;

/// Errors raised while building a task graph from raw records.
///
/// All of them are detected before any pass runs, so an analysis either
/// fully succeeds or fails with exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CpmError {
    /// A task lists a predecessor that is not in the task set.
    #[error("Task {task:?} lists unknown predecessor {predecessor:?}")]
    UnknownPredecessor { task: String, predecessor: String },

    /// The predecessor relation contains a cycle.
    ///
    /// `cycle` starts and ends with the same task, e.g. `["A", "B", "A"]`.
    #[error("Circular dependency detected in task graph: {}", cycle.join(" -> "))]
    CyclicDependency { cycle: Vec<String> },

    /// Two records share an identifier.
    #[error("Duplicate task identifier {task:?}")]
    DuplicateTaskIdentifier { task: String },

    /// A duration is negative, not a decimal number, or too large to sum.
    #[error("Task {task:?} has invalid duration {value:?}")]
    InvalidDuration { task: String, value: String },

    /// A record has a blank task identifier (`row` is 1-based).
    #[error("Record {row} has no task identifier")]
    MissingTaskIdentifier { row: usize },
}

impl CpmError {
    /// Whether this error describes a structurally malformed graph
    /// (dangling reference or dependency cycle) rather than a bad record.
    pub fn is_malformed_graph(&self) -> bool {
        matches!(
            self,
            CpmError::UnknownPredecessor { .. } | CpmError::CyclicDependency { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message_lists_path() {
        let err = CpmError::CyclicDependency {
            cycle: vec!["A".to_string(), "B".to_string(), "A".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Circular dependency detected in task graph: A -> B -> A"
        );
    }

    #[test]
    fn test_malformed_graph_kinds() {
        let unknown = CpmError::UnknownPredecessor {
            task: "b".to_string(),
            predecessor: "x".to_string(),
        };
        let duplicate = CpmError::DuplicateTaskIdentifier {
            task: "a".to_string(),
        };
        let duration = CpmError::InvalidDuration {
            task: "a".to_string(),
            value: "-1".to_string(),
        };

        assert!(unknown.is_malformed_graph());
        assert!(CpmError::CyclicDependency { cycle: vec![] }.is_malformed_graph());
        assert!(!duplicate.is_malformed_graph());
        assert!(!duration.is_malformed_graph());
        assert!(!CpmError::MissingTaskIdentifier { row: 3 }.is_malformed_graph());
        assert_eq!(
            CpmError::MissingTaskIdentifier { row: 3 }.to_string(),
            "Record 3 has no task identifier"
        );
        assert_eq!(
            duration.to_string(),
            "Task \"a\" has invalid duration \"-1\""
        );
    }
}
