use crate::task::{NewTask, Task, TaskId, TimeEntry};
use crate::task_validation;
use chrono::{Local, NaiveDate};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
pub enum StoreError {
    Validation(String),
    NotFound(TaskId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(message) => write!(f, "validation error: {message}"),
            StoreError::NotFound(task_id) => write!(f, "task {task_id} not found"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<task_validation::TaskValidationError> for StoreError {
    fn from(value: task_validation::TaskValidationError) -> Self {
        StoreError::Validation(value.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A consistent point-in-time copy of both collections, taken under a single
/// read borrow so it can never show a time entry without the matching
/// `time_spent_hours` increment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub time_entries: Vec<TimeEntry>,
}

/// Owner of all session state: the task collection and the time log.
///
/// One instance per session; nothing is persisted. Tasks are never deleted
/// individually and time entries are never edited, so apart from
/// `reset_all` both collections only grow.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    time_log: Vec<TimeEntry>,
    next_id: TaskId,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            time_log: Vec::new(),
            next_id: 1,
        }
    }

    /// Validates and appends a new task, returning its freshly assigned id.
    /// A rejected draft leaves the store untouched.
    pub fn create_task(&mut self, new_task: NewTask) -> StoreResult<TaskId> {
        task_validation::validate_new_task(&new_task)?;

        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            description: new_task.description,
            category: new_task.category,
            priority: new_task.priority,
            start_date: new_task.start_date,
            due_date: new_task.due_date,
            status: new_task.status,
            progress_percent: new_task.progress_percent,
            time_spent_hours: 0.0,
        });
        Ok(id)
    }

    /// Logs a session dated today. See [`TaskStore::log_time_on`].
    pub fn log_time(
        &mut self,
        task_id: TaskId,
        duration_hours: f64,
        productivity: u8,
    ) -> StoreResult<()> {
        self.log_time_on(Local::now().date_naive(), task_id, duration_hours, productivity)
    }

    /// Appends a time entry and adds its duration to the referenced task's
    /// accumulated hours. All validation runs before the first mutation, so
    /// a rejected call appends no orphan entry and increments nothing.
    pub fn log_time_on(
        &mut self,
        date: NaiveDate,
        task_id: TaskId,
        duration_hours: f64,
        productivity: u8,
    ) -> StoreResult<()> {
        task_validation::validate_duration_hours(duration_hours)?;
        task_validation::validate_productivity(productivity)?;

        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or(StoreError::NotFound(task_id))?;

        task.time_spent_hours += duration_hours;
        self.time_log.push(TimeEntry {
            date,
            task_id,
            duration_hours,
            productivity,
        });
        Ok(())
    }

    pub fn find_task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    /// Tasks still eligible for time logging (status other than Done), in
    /// insertion order.
    pub fn list_active(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.status.is_active())
            .cloned()
            .collect()
    }

    /// Clears tasks and time entries together. There is no partial reset.
    /// The id counter is not rewound, so ids from before the reset stay
    /// dead instead of aliasing new tasks.
    pub fn reset_all(&mut self) {
        self.tasks.clear();
        self.time_log.clear();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            time_entries: self.time_log.clone(),
        }
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn entry_count(&self) -> usize {
        self.time_log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.time_log.is_empty()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Clonable handle for deployments where several callers share one session's
/// store. A single `RwLock` serializes every mutation, so `log_time`'s dual
/// side effect is indivisible relative to any concurrent `snapshot`.
#[derive(Clone)]
pub struct SharedTaskStore {
    store: Arc<RwLock<TaskStore>>,
}

impl SharedTaskStore {
    pub fn new() -> Self {
        Self::with_store(TaskStore::new())
    }

    pub fn with_store(store: TaskStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn create_task(&self, new_task: NewTask) -> StoreResult<TaskId> {
        self.store.write().create_task(new_task)
    }

    pub fn log_time(
        &self,
        task_id: TaskId,
        duration_hours: f64,
        productivity: u8,
    ) -> StoreResult<()> {
        self.store.write().log_time(task_id, duration_hours, productivity)
    }

    pub fn log_time_on(
        &self,
        date: NaiveDate,
        task_id: TaskId,
        duration_hours: f64,
        productivity: u8,
    ) -> StoreResult<()> {
        self.store
            .write()
            .log_time_on(date, task_id, duration_hours, productivity)
    }

    pub fn find_task(&self, task_id: TaskId) -> Option<Task> {
        self.store.read().find_task(task_id).cloned()
    }

    pub fn list_active(&self) -> Vec<Task> {
        self.store.read().list_active()
    }

    pub fn reset_all(&self) {
        self.store.write().reset_all();
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.read().snapshot()
    }
}

impl Default for SharedTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Category, Priority};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn draft(description: &str) -> NewTask {
        NewTask::new(
            description,
            Category::Work,
            Priority::Medium,
            d(2026, 8, 3),
            d(2026, 8, 10),
        )
    }

    #[test]
    fn ids_increment_and_survive_reset() {
        let mut store = TaskStore::new();
        assert_eq!(store.create_task(draft("first")).unwrap(), 1);
        assert_eq!(store.create_task(draft("second")).unwrap(), 2);

        store.reset_all();
        assert!(store.is_empty());
        assert_eq!(store.create_task(draft("third")).unwrap(), 3);
    }

    #[test]
    fn rejected_create_leaves_store_untouched() {
        let mut store = TaskStore::new();
        assert!(matches!(
            store.create_task(draft("")),
            Err(StoreError::Validation(_))
        ));
        assert_eq!(store.task_count(), 0);
    }
}
