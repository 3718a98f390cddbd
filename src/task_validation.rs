use crate::task::{NewTask, PRODUCTIVITY_MAX, PRODUCTIVITY_MIN};
use std::fmt;

#[derive(Debug, Clone)]
pub struct TaskValidationError {
    message: String,
}

impl TaskValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TaskValidationError {}

pub fn validate_new_task(task: &NewTask) -> Result<(), TaskValidationError> {
    if task.description.trim().is_empty() {
        return Err(TaskValidationError::new(
            "task description must not be empty",
        ));
    }

    if task.progress_percent > 100 {
        return Err(TaskValidationError::new(format!(
            "progress_percent {} out of range (must be between 0 and 100)",
            task.progress_percent
        )));
    }

    // start_date/due_date ordering is deliberately unconstrained.
    Ok(())
}

pub fn validate_duration_hours(duration_hours: f64) -> Result<(), TaskValidationError> {
    if !duration_hours.is_finite() || duration_hours <= 0.0 {
        return Err(TaskValidationError::new(format!(
            "duration_hours {duration_hours} is invalid (must be a positive number)"
        )));
    }
    Ok(())
}

pub fn validate_productivity(productivity: u8) -> Result<(), TaskValidationError> {
    if !(PRODUCTIVITY_MIN..=PRODUCTIVITY_MAX).contains(&productivity) {
        return Err(TaskValidationError::new(format!(
            "productivity {productivity} out of range (must be between {PRODUCTIVITY_MIN} and {PRODUCTIVITY_MAX})"
        )));
    }
    Ok(())
}
