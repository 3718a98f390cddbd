//! Derived dashboard views. Every function here is a pure function of a
//! snapshot slice: nothing is mutated, identical inputs give identical
//! outputs, and empty inputs yield empty or zero-valued results rather than
//! an arithmetic fault.

use crate::task::{Category, Status, Task, TimeEntry};
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Default look-ahead window for [`upcoming_deadlines`].
pub const DEADLINE_HORIZON_DAYS: i64 = 7;

/// Number of days a task may still have before its deadline counts as due
/// soon rather than normal.
pub const DUE_SOON_THRESHOLD_DAYS: i64 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub total: usize,
    pub done: usize,
    pub in_progress: usize,
    pub total_hours_spent: f64,
    pub done_ratio: f64,
}

/// Headline metrics for the dashboard's KPI row. `done_ratio` is 0.0 when
/// there are no tasks; it never divides by zero.
pub fn kpis(tasks: &[Task]) -> Kpis {
    let total = tasks.len();
    let done = tasks.iter().filter(|t| t.status == Status::Done).count();
    let in_progress = tasks
        .iter()
        .filter(|t| t.status == Status::InProgress)
        .count();
    let total_hours_spent = tasks.iter().map(|t| t.time_spent_hours).sum();
    let done_ratio = if total == 0 {
        0.0
    } else {
        done as f64 / total as f64
    };

    Kpis {
        total,
        done,
        in_progress,
        total_hours_spent,
        done_ratio,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Overdue,
    Soon,
    Normal,
}

impl UrgencyLevel {
    pub fn classify(days_left: i64) -> Self {
        if days_left < 0 {
            UrgencyLevel::Overdue
        } else if days_left <= DUE_SOON_THRESHOLD_DAYS {
            UrgencyLevel::Soon
        } else {
            UrgencyLevel::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Overdue => "overdue",
            UrgencyLevel::Soon => "soon",
            UrgencyLevel::Normal => "normal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Urgency {
    pub days_left: i64,
    pub level: UrgencyLevel,
}

/// Due-date proximity of one task. The presentation layer maps the level to
/// a style; the computation stays here.
pub fn urgency(task: &Task, today: NaiveDate) -> Urgency {
    let days_left = (task.due_date - today).num_days();
    Urgency {
        days_left,
        level: UrgencyLevel::classify(days_left),
    }
}

pub fn category_distribution(tasks: &[Task]) -> BTreeMap<Category, usize> {
    let mut counts = BTreeMap::new();
    for task in tasks {
        *counts.entry(task.category).or_insert(0) += 1;
    }
    counts
}

pub fn status_distribution(tasks: &[Task]) -> BTreeMap<Status, usize> {
    let mut counts = BTreeMap::new();
    for task in tasks {
        *counts.entry(task.status).or_insert(0) += 1;
    }
    counts
}

pub fn hours_by_category(tasks: &[Task]) -> BTreeMap<Category, f64> {
    let mut hours = BTreeMap::new();
    for task in tasks {
        *hours.entry(task.category).or_insert(0.0) += task.time_spent_hours;
    }
    hours
}

/// Tasks not yet done whose due date falls within `horizon_days` of `today`
/// (overdue tasks included), sorted ascending by due date and then by
/// priority rank. The sort is stable, so equal keys keep insertion order.
pub fn upcoming_deadlines(tasks: &[Task], today: NaiveDate, horizon_days: i64) -> Vec<Task> {
    let horizon = today + Duration::days(horizon_days);
    let mut due: Vec<Task> = tasks
        .iter()
        .filter(|task| task.status != Status::Done && task.due_date <= horizon)
        .cloned()
        .collect();
    due.sort_by_key(|task| (task.due_date, task.priority.rank()));
    due
}

/// One point on the weekly productivity chart: the mean self-rating of all
/// sessions logged in one ISO calendar week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyProductivity {
    /// ISO week-numbering year (differs from the calendar year at year
    /// boundaries, e.g. 2024-12-30 belongs to week 1 of 2025).
    pub year: i32,
    pub week: u32,
    pub mean_productivity: f64,
}

impl WeeklyProductivity {
    /// Chart axis label in "week/year" form, e.g. "34/2026".
    pub fn label(&self) -> String {
        format!("{}/{}", self.week, self.year)
    }
}

/// Mean productivity per ISO calendar week, in chronological order.
pub fn weekly_productivity_trend(entries: &[TimeEntry]) -> Vec<WeeklyProductivity> {
    let mut buckets: BTreeMap<(i32, u32), (u64, usize)> = BTreeMap::new();
    for entry in entries {
        let week = entry.date.iso_week();
        let bucket = buckets.entry((week.year(), week.week())).or_insert((0, 0));
        bucket.0 += u64::from(entry.productivity);
        bucket.1 += 1;
    }

    buckets
        .into_iter()
        .map(|((year, week), (sum, count))| WeeklyProductivity {
            year,
            week,
            mean_productivity: sum as f64 / count as f64,
        })
        .collect()
}
