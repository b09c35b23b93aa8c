//! Python bindings for the CPM engine.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use rust_decimal::Decimal;

use crate::{analyze_with_config, AnalysisConfig, ScheduleResult, TaskRecord, TaskSchedule};

/// Computed schedule for one task (PyO3 wrapper).
///
/// Times are exposed as `decimal.Decimal`.
#[pyclass(name = "TaskSchedule", frozen)]
#[derive(Clone, Debug)]
pub struct PyTaskSchedule {
    #[pyo3(get)]
    pub task: String,
    #[pyo3(get)]
    pub duration: Decimal,
    #[pyo3(get)]
    pub predecessors: Vec<String>,
    #[pyo3(get)]
    pub successors: Vec<String>,
    #[pyo3(get)]
    pub es: Decimal,
    #[pyo3(get)]
    pub ef: Decimal,
    #[pyo3(get)]
    pub ls: Decimal,
    #[pyo3(get)]
    pub lf: Decimal,
    #[pyo3(get)]
    pub slack: Decimal,
    #[pyo3(get)]
    pub critical: bool,
}

#[pymethods]
impl PyTaskSchedule {
    fn __repr__(&self) -> String {
        format!(
            "TaskSchedule(task={:?}, es={}, ef={}, ls={}, lf={}, slack={}, critical={})",
            self.task, self.es, self.ef, self.ls, self.lf, self.slack, self.critical
        )
    }
}

impl From<TaskSchedule> for PyTaskSchedule {
    fn from(t: TaskSchedule) -> Self {
        Self {
            task: t.task,
            duration: t.duration,
            predecessors: t.predecessors,
            successors: t.successors,
            es: t.es,
            ef: t.ef,
            ls: t.ls,
            lf: t.lf,
            slack: t.slack,
            critical: t.critical,
        }
    }
}

/// Result of a CPM analysis (PyO3 wrapper).
#[pyclass(name = "ScheduleResult", frozen)]
#[derive(Clone, Debug)]
pub struct PyScheduleResult {
    #[pyo3(get)]
    pub tasks: Vec<PyTaskSchedule>,
    #[pyo3(get)]
    pub project_duration: Decimal,
    #[pyo3(get)]
    pub critical_tasks: Vec<String>,
    #[pyo3(get)]
    pub critical_paths: Vec<Vec<String>>,
}

#[pymethods]
impl PyScheduleResult {
    fn __repr__(&self) -> String {
        format!(
            "ScheduleResult(tasks={}, project_duration={}, critical_paths={})",
            self.tasks.len(),
            self.project_duration,
            self.critical_paths.len()
        )
    }
}

impl From<ScheduleResult> for PyScheduleResult {
    fn from(r: ScheduleResult) -> Self {
        Self {
            tasks: r.tasks.into_iter().map(PyTaskSchedule::from).collect(),
            project_duration: r.project_duration,
            critical_tasks: r.critical_tasks,
            critical_paths: r.critical_paths,
        }
    }
}

/// Run a CPM analysis.
///
/// # Arguments
/// * `records` - List of `(task, duration, predecessors)` string tuples
/// * `slack_tolerance` - Absolute tolerance for zero slack, a `decimal.Decimal`
///   or int (default None = exact)
/// * `max_critical_paths` - Cap on enumerated critical chains (None = all)
/// * `verbosity` - Log level on stderr: 0=silent, 1=changes, 2=checks, 3=debug
///
/// # Raises
/// * ValueError on invalid durations, blank or duplicate ids, unknown
///   predecessors, cycles, or a negative tolerance
#[pyfunction]
#[pyo3(name = "analyze", signature = (records, slack_tolerance=None, max_critical_paths=None, verbosity=0))]
fn py_analyze(
    records: Vec<(String, String, String)>,
    slack_tolerance: Option<Decimal>,
    max_critical_paths: Option<usize>,
    verbosity: u8,
) -> PyResult<PyScheduleResult> {
    let records: Vec<TaskRecord> = records
        .into_iter()
        .map(|(task, duration, predecessors)| TaskRecord {
            task,
            duration,
            predecessors,
        })
        .collect();
    let slack_tolerance = slack_tolerance.unwrap_or(Decimal::ZERO);
    if slack_tolerance < Decimal::ZERO {
        return Err(pyo3::exceptions::PyValueError::new_err(
            "slack_tolerance must be non-negative",
        ));
    }
    let config = AnalysisConfig {
        slack_tolerance,
        max_critical_paths,
        verbosity,
    };

    match analyze_with_config(&records, &config) {
        Ok(result) => Ok(result.into()),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// The cpm_rust Python module.
#[pymodule]
fn cpm_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTaskSchedule>()?;
    m.add_class::<PyScheduleResult>()?;
    m.add_function(wrap_pyfunction!(py_analyze, m)?)?;
    Ok(())
}
