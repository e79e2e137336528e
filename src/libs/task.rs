//! Task records and the join that turns them into dashboard task views.
//!
//! Fixtures keep tasks normalized: the task row only holds foreign keys, while
//! project names, owners, logged hours and notes live in their own files.
//! [`load_tasks`] joins them back into one [`Task`] per raw task, keeping the
//! input order.
//!
//! ```rust
//! use pmdash::libs::task::{load_tasks, LegacyProjectFallback, RawTask};
//!
//! let raw = vec![RawTask { id: 1, title: "Kickoff".into(), ..Default::default() }];
//! let tasks = load_tasks(&raw, &[], &[], &[], &[], &LegacyProjectFallback::default());
//! assert_eq!(tasks[0].hours(), 0.0);
//! ```

use crate::libs::date::{parse_date, parse_opt_date, MAX_SAFE_INTEGER};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Task row as stored in `projects-tasks.json`.
///
/// `project` and `owner` are only present in fixtures written before the
/// project and people files were split out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTask {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "opt_id")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "opt_id")]
    pub owner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub order: Option<f64>,
    #[serde(default, deserialize_with = "opt_id")]
    pub ticktick_project_id: Option<String>,
    #[serde(default, deserialize_with = "opt_id")]
    pub ticktick_column_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(deserialize_with = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// One block of logged time against a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourEntry {
    #[serde(default)]
    pub id: u64,
    pub task_id: u64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default)]
    pub id: u64,
    pub task_id: u64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Denormalized task view consumed by the filter, sort and stats engines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub project_id: Option<String>,
    /// Resolved project name, or the raw project id when it did not resolve.
    pub project: Option<String>,
    pub owner_id: Option<String>,
    /// Resolved person name, or the raw owner id when it did not resolve.
    pub owner: Option<String>,
    pub phase: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub entries: Vec<HourEntry>,
    /// Formatted by [`format_notes`].
    pub notes: String,
}

impl Task {
    /// Logged hours, always summed from `entries`.
    pub fn hours(&self) -> f64 {
        self.entries.iter().map(|entry| entry.hours.unwrap_or(0.0)).sum()
    }

    pub fn start_timestamp(&self) -> i64 {
        parse_opt_date(self.start_date.as_deref())
    }

    pub fn end_timestamp(&self) -> i64 {
        parse_opt_date(self.end_date.as_deref())
    }
}

/// Project assignment for tasks that predate multi-project fixtures.
///
/// Tasks without a project whose phase is in `phases` belong to `project`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyProjectFallback {
    pub phases: Vec<String>,
    pub project: String,
}

impl Default for LegacyProjectFallback {
    fn default() -> Self {
        Self {
            phases: vec!["Fase 1".to_string(), "Mantenimiento".to_string(), "Errores".to_string()],
            project: "Ayuntamiento de Belmontejo".to_string(),
        }
    }
}

impl LegacyProjectFallback {
    pub fn resolve(&self, phase: Option<&str>) -> Option<String> {
        let phase = phase?;
        self.phases.iter().any(|p| p == phase).then(|| self.project.clone())
    }
}

/// Builds a task view from a single raw row, without any join.
///
/// A non-empty `project` on the row wins; otherwise the legacy phase mapping
/// decides, and the project stays unset when it does not apply.
pub fn normalize_task(raw: &RawTask, fallback: &LegacyProjectFallback) -> Task {
    let project = non_empty(raw.project.clone()).or_else(|| fallback.resolve(raw.phase.as_deref()));

    Task {
        id: raw.id,
        title: raw.title.clone(),
        project_id: raw.project_id.clone(),
        project,
        owner_id: raw.owner_id.clone(),
        owner: non_empty(raw.owner.clone()),
        phase: raw.phase.clone(),
        status: raw.status.clone(),
        start_date: raw.start_date.clone(),
        end_date: raw.end_date.clone(),
        entries: Vec::new(),
        notes: String::new(),
    }
}

/// Joins raw tasks with their projects, owners, hour entries and notes.
///
/// Output order matches `tasks`. Foreign keys that do not resolve display the
/// raw id. Entries keep their fixture order within each task.
pub fn load_tasks(
    tasks: &[RawTask],
    projects: &[Project],
    people: &[Person],
    entries: &[HourEntry],
    notes: &[Note],
    fallback: &LegacyProjectFallback,
) -> Vec<Task> {
    let project_by_id: HashMap<&str, &Project> = projects.iter().map(|p| (p.id.as_str(), p)).collect();
    let person_by_id: HashMap<&str, &Person> = people.iter().map(|p| (p.id.as_str(), p)).collect();

    let mut entries_by_task: HashMap<u64, Vec<HourEntry>> = HashMap::new();
    for entry in entries {
        entries_by_task.entry(entry.task_id).or_default().push(entry.clone());
    }

    let mut notes_by_task: HashMap<u64, Vec<&Note>> = HashMap::new();
    for note in notes {
        notes_by_task.entry(note.task_id).or_default().push(note);
    }

    tasks
        .iter()
        .map(|raw| {
            let mut task = normalize_task(raw, fallback);

            if let Some(project_id) = raw.project_id.as_deref() {
                let name = project_by_id.get(project_id).and_then(|p| non_empty(Some(p.name.clone())));
                task.project = name.or_else(|| Some(project_id.to_string()));
            }
            if let Some(owner_id) = raw.owner_id.as_deref() {
                let name = person_by_id.get(owner_id).and_then(|p| non_empty(Some(p.name.clone())));
                task.owner = name.or_else(|| Some(owner_id.to_string()));
            }

            task.entries = entries_by_task.get(&raw.id).cloned().unwrap_or_default();
            task.notes = notes_by_task.get(&raw.id).map(|n| format_notes(n)).unwrap_or_default();
            task
        })
        .collect()
}

/// Renders a task's notes oldest first, one `(date) text` line per note.
///
/// Undated notes go last and render without the date prefix. Notes whose
/// text is blank are dropped.
pub fn format_notes(notes: &[&Note]) -> String {
    let mut sorted: Vec<&Note> = notes.to_vec();
    sorted.sort_by_key(|note| note_sort_value(note.date.as_deref()));

    sorted
        .into_iter()
        .filter_map(|note| {
            let text = note.note.as_deref().unwrap_or("");
            if text.trim().is_empty() {
                return None;
            }
            Some(match note.date.as_deref().filter(|d| !d.is_empty()) {
                Some(date) => format!("({}) {}", date, text),
                None => text.to_string(),
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn note_sort_value(date: Option<&str>) -> i64 {
    match date.map(parse_date) {
        Some(0) | None => MAX_SAFE_INTEGER,
        Some(ts) => ts,
    }
}

/// Hour entries newest first; entries on the same day by id, highest first.
pub fn sort_entries(entries: &[HourEntry]) -> Vec<HourEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        let by_date = parse_opt_date(b.date.as_deref()).cmp(&parse_opt_date(a.date.as_deref()));
        by_date.then_with(|| b.id.cmp(&a.id))
    });
    sorted
}

/// Tasks belonging to one project id; all tasks when `project_id` is empty.
pub fn filter_tasks_by_project(tasks: &[Task], project_id: &str) -> Vec<Task> {
    if project_id.is_empty() {
        return tasks.to_vec();
    }
    tasks
        .iter()
        .filter(|task| task.project_id.as_deref() == Some(project_id))
        .cloned()
        .collect()
}

/// Projects by `order`, unordered ones last, then by name.
pub fn sort_projects(projects: &[Project]) -> Vec<Project> {
    let mut sorted = projects.to_vec();
    sorted.sort_by(|a, b| {
        order_value(a.order)
            .partial_cmp(&order_value(b.order))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    sorted
}

/// Numeric display order, with missing or non-finite values at +∞.
pub(crate) fn order_value(order: Option<f64>) -> f64 {
    order.filter(|o| o.is_finite()).unwrap_or(f64::INFINITY)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Fixture ids can be written as strings or numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

pub(crate) fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(RawId::into_string)
}

pub(crate) fn opt_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw: Option<RawId> = Option::deserialize(deserializer)?;
    Ok(raw.map(RawId::into_string).filter(|id| !id.is_empty()))
}
