//! CSV loading and export around [`crate::analyze`].
//!
//! Input files carry `Task`, `Duration` and `Predecessors` columns (by name,
//! any order). Exports carry the full schedule, one row per task.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use crate::models::{ScheduleResult, TaskRecord};
use crate::report::format_number;
use crate::CpmError;

/// Default field delimiter for schedule files.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Errors from reading or writing schedule files.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Analysis(#[from] CpmError),
}

/// One exported schedule row.
#[derive(Debug, Serialize)]
struct ScheduleRow<'a> {
    #[serde(rename = "Task")]
    task: &'a str,
    #[serde(rename = "Predecessors")]
    predecessors: String,
    #[serde(rename = "Duration")]
    duration: String,
    #[serde(rename = "ES")]
    es: String,
    #[serde(rename = "EF")]
    ef: String,
    #[serde(rename = "LS")]
    ls: String,
    #[serde(rename = "LF")]
    lf: String,
    #[serde(rename = "Slack")]
    slack: String,
    #[serde(rename = "Critical")]
    critical: &'static str,
    #[serde(rename = "Successors")]
    successors: String,
}

/// Read task records from any reader.
///
/// Whitespace around fields is trimmed. A missing `Predecessors` column or
/// cell means no predecessors.
pub fn read_records<R: Read>(reader: R, delimiter: u8) -> Result<Vec<TaskRecord>, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: TaskRecord = row?;
        records.push(record);
    }
    Ok(records)
}

/// Read task records from a file.
pub fn load_records(path: &Path, delimiter: u8) -> Result<Vec<TaskRecord>, IoError> {
    read_records(File::open(path)?, delimiter)
}

/// Write a schedule as CSV, one row per task in input order.
pub fn write_schedule<W: Write>(
    writer: W,
    result: &ScheduleResult,
    delimiter: u8,
) -> Result<(), IoError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    for task in &result.tasks {
        writer.serialize(ScheduleRow {
            task: &task.task,
            predecessors: task.predecessors.join(","),
            duration: format_number(task.duration),
            es: format_number(task.es),
            ef: format_number(task.ef),
            ls: format_number(task.ls),
            lf: format_number(task.lf),
            slack: format_number(task.slack),
            critical: if task.critical { "True" } else { "False" },
            successors: task.successors.join(","),
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// File name used for an export taken at `timestamp`.
pub fn export_file_name(timestamp: NaiveDateTime) -> String {
    format!("cpm_output_{}.csv", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Export a schedule into `output_dir`, creating it if needed.
///
/// Returns the path of the written file.
pub fn export_schedule(
    result: &ScheduleResult,
    output_dir: &Path,
    delimiter: u8,
    timestamp: NaiveDateTime,
) -> Result<PathBuf, IoError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(export_file_name(timestamp));
    write_schedule(File::create(&path)?, result, delimiter)?;
    Ok(path)
}
