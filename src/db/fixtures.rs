//! JSON fixture files backing the dashboard.
//!
//! Only `projects-tasks.json` is required. The other files load as empty
//! lists when they are absent, so a directory holding just tasks is a valid
//! data set.

use crate::libs::messages::Message;
use crate::libs::milestone::Milestone;
use crate::libs::task::{load_tasks, HourEntry, LegacyProjectFallback, Note, Person, Project, RawTask, Task};
use crate::libs::todo::Todo;
use crate::msg_debug;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const TASKS_FILE: &str = "projects-tasks.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const PEOPLE_FILE: &str = "people.json";
pub const ENTRIES_FILE: &str = "task-entries.json";
pub const NOTES_FILE: &str = "task-notes.json";
pub const TODOS_FILE: &str = "todos.json";
pub const MILESTONES_FILE: &str = "milestones.json";

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse fixture {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Every fixture file of one data directory.
#[derive(Debug, Clone, Default)]
pub struct Fixtures {
    pub tasks: Vec<RawTask>,
    pub projects: Vec<Project>,
    pub people: Vec<Person>,
    pub entries: Vec<HourEntry>,
    pub notes: Vec<Note>,
    pub todos: Vec<Todo>,
    pub milestones: Vec<Milestone>,
}

impl Fixtures {
    pub fn load(dir: &Path) -> Result<Fixtures, FixtureError> {
        Ok(Fixtures {
            tasks: read_required(&dir.join(TASKS_FILE))?,
            projects: read_optional(&dir.join(PROJECTS_FILE))?,
            people: read_optional(&dir.join(PEOPLE_FILE))?,
            entries: read_optional(&dir.join(ENTRIES_FILE))?,
            notes: read_optional(&dir.join(NOTES_FILE))?,
            todos: read_optional(&dir.join(TODOS_FILE))?,
            milestones: read_optional(&dir.join(MILESTONES_FILE))?,
        })
    }

    /// Joined task views, in fixture order.
    pub fn tasks(&self, fallback: &LegacyProjectFallback) -> Vec<Task> {
        load_tasks(&self.tasks, &self.projects, &self.people, &self.entries, &self.notes, fallback)
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }
}

fn read_required<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, FixtureError> {
    let raw = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_optional<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, FixtureError> {
    if !path.exists() {
        let name = path.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
        msg_debug!(Message::FixtureMissing(name));
        return Ok(Vec::new());
    }
    read_required(path)
}
