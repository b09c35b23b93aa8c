//! Critical Path Method (CPM) scheduling engine.
//!
//! Given tasks with durations and predecessor relationships, computes each
//! task's Early Start/Finish, Late Start/Finish and Slack, and identifies the
//! critical path(s). The engine is a pure function from records to a
//! [`ScheduleResult`]; CSV handling and reporting live in [`csv_io`] and
//! [`report`] and only call [`analyze`].

pub mod backward_pass;
mod config;
pub mod critical_path;
pub mod csv_io;
mod error;
pub mod forward_pass;
mod graph;
mod interner;
pub mod logging;
mod models;
#[cfg(feature = "python")]
mod python;
pub mod report;

pub use config::AnalysisConfig;
pub use error::CpmError;
pub use graph::TaskGraph;
pub use interner::{TaskId, TaskIdInterner};
pub use models::{ScheduleResult, Task, TaskRecord, TaskSchedule, TaskTiming};

/// Run a full CPM analysis with the default configuration.
///
/// # Arguments
/// * `records` - Raw task rows; order does not affect the computed values
///
/// # Returns
/// * `Ok(ScheduleResult)` with per-task timings, project duration and critical chains
/// * `Err(CpmError)` if a duration is invalid, an identifier is blank or repeats, a
///   predecessor is unknown, or dependencies form a cycle
pub fn analyze(records: &[TaskRecord]) -> Result<ScheduleResult, CpmError> {
    analyze_with_config(records, &AnalysisConfig::default())
}

/// Run a full CPM analysis with an explicit configuration.
pub fn analyze_with_config(
    records: &[TaskRecord],
    config: &AnalysisConfig,
) -> Result<ScheduleResult, CpmError> {
    let graph = TaskGraph::build(records, config.verbosity)?;
    Ok(graph.schedule(config))
}
