//! CSV export of the task table for the dashboard's download action.
//! The format is flat: one fixed header row, one row per task, comma
//! separated, dates in ISO 8601.

use crate::task::Task;
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug)]
pub enum ExportError {
    Io(io::Error),
    Csv(csv::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(err) => write!(f, "io error: {err}"),
            ExportError::Csv(err) => write!(f, "csv error: {err}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<io::Error> for ExportError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type ExportResult<T> = Result<T, ExportError>;

pub const CSV_HEADERS: [&str; 8] = [
    "Task",
    "Category",
    "Priority",
    "StartDate",
    "DueDate",
    "Status",
    "ProgressPercent",
    "TimeSpentHours",
];

#[derive(Serialize)]
struct TaskCsvRecord<'a> {
    task: &'a str,
    category: &'a str,
    priority: &'a str,
    start_date: String,
    due_date: String,
    status: &'a str,
    progress_percent: u8,
    time_spent_hours: f64,
}

impl<'a> From<&'a Task> for TaskCsvRecord<'a> {
    fn from(task: &'a Task) -> Self {
        Self {
            task: &task.description,
            category: task.category.as_str(),
            priority: task.priority.as_str(),
            start_date: task.start_date.format("%Y-%m-%d").to_string(),
            due_date: task.due_date.format("%Y-%m-%d").to_string(),
            status: task.status.as_str(),
            progress_percent: task.progress_percent,
            time_spent_hours: task.time_spent_hours,
        }
    }
}

/// Writes the task table as CSV to any writer. The header row is written
/// even when the task list is empty.
pub fn write_tasks_csv<W: Write>(tasks: &[Task], writer: W) -> ExportResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(CSV_HEADERS)?;
    for task in tasks {
        writer.serialize(TaskCsvRecord::from(task))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn export_tasks_to_csv<P: AsRef<Path>>(tasks: &[Task], path: P) -> ExportResult<()> {
    let file = File::create(path)?;
    write_tasks_csv(tasks, file)
}
