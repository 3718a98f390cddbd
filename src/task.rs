use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type TaskId = i32;

/// Bounds the time-logging form should offer for a single session. The store
/// itself only requires a finite, positive duration.
pub const SESSION_MIN_HOURS: f64 = 0.25;
pub const SESSION_MAX_HOURS: f64 = 12.0;

/// Inclusive range for the self-rated productivity of a session.
pub const PRODUCTIVITY_MIN: u8 = 1;
pub const PRODUCTIVITY_MAX: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Work,
    Personal,
    Learning,
    Fitness,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Work,
        Category::Personal,
        Category::Learning,
        Category::Fitness,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Learning => "learning",
            Category::Fitness => "fitness",
            Category::Other => "other",
        }
    }

    pub fn from_str(input: &str) -> Option<Self> {
        match input {
            "work" => Some(Category::Work),
            "personal" => Some(Category::Personal),
            "learning" => Some(Category::Learning),
            "fitness" => Some(Category::Fitness),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Sort rank used by deadline views: the most severe priority sorts
    /// first (Critical=0, High=1, Medium=2, Low=3).
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    pub fn from_str(input: &str) -> Option<Self> {
        match input {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "critical" => Some(Priority::Critical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Planned,
    InProgress,
    InReview,
    Done,
}

impl Status {
    /// Active tasks are the ones time can still be logged against from the
    /// time-entry form. There is no enforced transition graph; a task may be
    /// created in any status and holds it until changed by the caller.
    pub fn is_active(&self) -> bool {
        matches!(self, Status::Planned | Status::InProgress | Status::InReview)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Planned => "planned",
            Status::InProgress => "in_progress",
            Status::InReview => "in_review",
            Status::Done => "done",
        }
    }

    pub fn from_str(input: &str) -> Option<Self> {
        match input {
            "planned" => Some(Status::Planned),
            "in_progress" => Some(Status::InProgress),
            "in_review" => Some(Status::InReview),
            "done" => Some(Status::Done),
            _ => None,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Planned
    }
}

/// One unit of work tracked by the store.
///
/// `id` and `time_spent_hours` are store-managed: the id is assigned at
/// creation and never reused, and the accumulated hours change only through
/// `TaskStore::log_time`, which keeps them equal to the sum of the durations
/// of all time entries referencing this task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: Status,
    pub progress_percent: u8,
    pub time_spent_hours: f64,
}

/// One logged work session against a task. Entries are append-only: they are
/// never edited or deleted individually, only cleared wholesale by
/// `TaskStore::reset_all`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub date: NaiveDate,
    pub task_id: TaskId,
    pub duration_hours: f64,
    pub productivity: u8,
}

/// Creation payload for a task: every caller-supplied field, with the
/// store-managed ones (`id`, `time_spent_hours`) left out. Deserializable so
/// a form layer can bind its fields directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub progress_percent: u8,
}

impl NewTask {
    pub fn new(
        description: impl Into<String>,
        category: Category,
        priority: Priority,
        start_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            category,
            priority,
            start_date,
            due_date,
            status: Status::Planned,
            progress_percent: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_tokens_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        for priority in [
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Critical,
        ] {
            assert_eq!(Priority::from_str(priority.as_str()), Some(priority));
        }
        for status in [
            Status::Planned,
            Status::InProgress,
            Status::InReview,
            Status::Done,
        ] {
            assert_eq!(Status::from_str(status.as_str()), Some(status));
        }
    }

    #[test]
    fn priority_rank_orders_critical_first() {
        assert!(Priority::Critical.rank() < Priority::High.rank());
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }

    #[test]
    fn done_is_the_only_inactive_status() {
        assert!(Status::Planned.is_active());
        assert!(Status::InProgress.is_active());
        assert!(Status::InReview.is_active());
        assert!(!Status::Done.is_active());
    }
}
