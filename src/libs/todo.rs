//! Project to-dos and due-date bucketing.

use crate::libs::date::{parse_flexible_date, sortable_timestamp, start_of_day};
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(default, deserialize_with = "crate::libs::task::opt_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "crate::libs::task::opt_id")]
    pub project_id: Option<String>,
    /// Project key of fixtures written before `projectId` existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Todo {
    fn project_key(&self) -> Option<&str> {
        self.project_id.as_deref().or(self.project.as_deref())
    }
}

/// To-dos of one project; all of them when no project id is given.
pub fn filter_todos_by_project(todos: &[Todo], project_id: Option<&str>) -> Vec<Todo> {
    match project_id.filter(|id| !id.is_empty()) {
        None => todos.to_vec(),
        Some(id) => todos.iter().filter(|todo| todo.project_key() == Some(id)).cloned().collect(),
    }
}

/// To-dos by due date, earliest first; undated or unreadable dates go last.
pub fn sort_todos(todos: &[Todo]) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by_key(|todo| sortable_timestamp(todo.due_date.as_deref()));
    sorted
}

/// A to-do is done only for the exact statuses `Completada` and `Done`.
///
/// Unlike [`crate::libs::milestone::is_milestone_done`] this is case-sensitive.
pub fn is_todo_done(todo: &Todo) -> bool {
    matches!(todo.status.as_deref(), Some("Completada") | Some("Done"))
}

pub fn visible_todos(todos: &[Todo], show_completed: bool) -> Vec<Todo> {
    if show_completed {
        return todos.to_vec();
    }
    todos.iter().filter(|todo| !is_todo_done(todo)).cloned().collect()
}

/// Where a due date falls relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DueBucket {
    Overdue,
    Today,
    Upcoming,
    #[serde(rename = "nodate")]
    NoDate,
}

impl DueBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            DueBucket::Overdue => "overdue",
            DueBucket::Today => "today",
            DueBucket::Upcoming => "upcoming",
            DueBucket::NoDate => "nodate",
        }
    }
}

/// Buckets a due date against the local day containing `now`.
///
/// Today spans `[local midnight, next local midnight)`.
///
/// ```rust
/// use chrono::Local;
/// use pmdash::libs::todo::{classify_due, DueBucket};
///
/// assert_eq!(classify_due(None, Local::now()), DueBucket::NoDate);
/// assert_eq!(classify_due(Some("01/01/2000"), Local::now()), DueBucket::Overdue);
/// ```
pub fn classify_due(due: Option<&str>, now: DateTime<Local>) -> DueBucket {
    let Some(due) = due.and_then(parse_flexible_date) else {
        return DueBucket::NoDate;
    };

    let due = due.timestamp_millis();
    let today_start = start_of_day(now);
    let tomorrow_start = start_of_day(now + Duration::days(1));

    if due < today_start {
        DueBucket::Overdue
    } else if due < tomorrow_start {
        DueBucket::Today
    } else {
        DueBucket::Upcoming
    }
}
