//! Task sort engine.
//!
//! Sorting is stable: tasks with equal keys keep their input order in both
//! directions. The input slice is never reordered.

use crate::libs::task::Task;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
#[value(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Id,
    Title,
    Project,
    Phase,
    Owner,
    Status,
    StartDate,
    EndDate,
    Hours,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Title => "title",
            SortKey::Project => "project",
            SortKey::Phase => "phase",
            SortKey::Owner => "owner",
            SortKey::Status => "status",
            SortKey::StartDate => "startDate",
            SortKey::EndDate => "endDate",
            SortKey::Hours => "hours",
        }
    }

    /// Parses a column key; anything unknown sorts by id.
    pub fn parse(value: &str) -> Self {
        match value {
            "title" => SortKey::Title,
            "project" => SortKey::Project,
            "phase" => SortKey::Phase,
            "owner" => SortKey::Owner,
            "status" => SortKey::Status,
            "startDate" => SortKey::StartDate,
            "endDate" => SortKey::EndDate,
            "hours" => SortKey::Hours,
            _ => SortKey::Id,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortDir {
    type Err = std::convert::Infallible;

    /// `asc` is ascending; every other value is descending.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(if value == "asc" { SortDir::Asc } else { SortDir::Desc })
    }
}

/// Current sort column and direction of a task table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub dir: SortDir,
}

impl SortState {
    pub fn new(key: SortKey, dir: SortDir) -> Self {
        Self { key, dir }
    }

    /// Next state after a click on the `key` column header.
    ///
    /// Clicking the active column flips its direction; clicking another column
    /// selects it ascending.
    pub fn toggle(self, key: SortKey) -> Self {
        if self.key == key {
            let dir = match self.dir {
                SortDir::Asc => SortDir::Desc,
                SortDir::Desc => SortDir::Asc,
            };
            Self { key, dir }
        } else {
            Self { key, dir: SortDir::Asc }
        }
    }
}

/// Value a task is compared by for a given key.
#[derive(Debug, PartialEq, PartialOrd)]
enum SortValue {
    Number(f64),
    Text(String),
}

fn sort_value(task: &Task, key: SortKey) -> SortValue {
    let text = |field: &Option<String>| SortValue::Text(field.as_deref().unwrap_or("").to_lowercase());
    match key {
        SortKey::Id => SortValue::Number(task.id as f64),
        SortKey::Title => SortValue::Text(task.title.to_lowercase()),
        SortKey::Project => text(&task.project),
        SortKey::Phase => text(&task.phase),
        SortKey::Owner => text(&task.owner),
        SortKey::Status => text(&task.status),
        SortKey::StartDate => SortValue::Number(task.start_timestamp() as f64),
        SortKey::EndDate => SortValue::Number(task.end_timestamp() as f64),
        SortKey::Hours => SortValue::Number(task.hours()),
    }
}

/// Returns a sorted copy of `tasks`.
pub fn sort_tasks(tasks: &[Task], state: SortState) -> Vec<Task> {
    let mut keyed: Vec<(SortValue, &Task)> = tasks.iter().map(|t| (sort_value(t, state.key), t)).collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.partial_cmp(b).unwrap_or(Ordering::Equal);
        match state.dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });

    keyed.into_iter().map(|(_, task)| task.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_falls_back_to_id() {
        assert_eq!(SortKey::parse("budget"), SortKey::Id);
        assert_eq!(SortKey::parse("startDate"), SortKey::StartDate);
    }

    #[test]
    fn test_non_asc_direction_is_desc() {
        assert_eq!("asc".parse::<SortDir>(), Ok(SortDir::Asc));
        assert_eq!("ASC".parse::<SortDir>(), Ok(SortDir::Desc));
        assert_eq!("".parse::<SortDir>(), Ok(SortDir::Desc));
    }
}
