pub mod aggregate;
pub mod export;
pub mod store;
pub mod task;
pub(crate) mod task_validation;

pub use aggregate::{
    DEADLINE_HORIZON_DAYS, DUE_SOON_THRESHOLD_DAYS, Kpis, Urgency, UrgencyLevel,
    WeeklyProductivity, category_distribution, hours_by_category, kpis, status_distribution,
    upcoming_deadlines, urgency, weekly_productivity_trend,
};
pub use export::{CSV_HEADERS, ExportError, ExportResult, export_tasks_to_csv, write_tasks_csv};
pub use store::{SharedTaskStore, Snapshot, StoreError, StoreResult, TaskStore};
pub use task::{
    Category, NewTask, PRODUCTIVITY_MAX, PRODUCTIVITY_MIN, Priority, SESSION_MAX_HOURS,
    SESSION_MIN_HOURS, Status, Task, TaskId, TimeEntry,
};
