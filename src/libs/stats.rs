//! Aggregation engine for dashboard statistics.
//!
//! Every function takes the task collection it should describe and returns
//! freshly built totals. Callers decide which collection that is: filter
//! options in particular must be built from the unfiltered task list so that
//! clearing a filter brings every option back.

use crate::libs::task::{sort_projects, Project, Task};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// Project key for tasks without a project.
pub const NO_PROJECT: &str = "Sin proyecto";
/// Placeholder for a missing categorical value.
pub const MISSING: &str = "—";

pub const STATUS_COMPLETED: &str = "Completada";
pub const STATUS_IN_PROGRESS: &str = "En curso";
pub const STATUS_BLOCKED: &str = "Bloqueada";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_hours: f64,
    pub total_cost: f64,
    /// Occurrences per status; tasks without a status count under `""`.
    pub status_counts: BTreeMap<String, usize>,
}

impl DashboardStats {
    pub fn count(&self, status: &str) -> usize {
        self.status_counts.get(status).copied().unwrap_or(0)
    }
}

/// Totals, cost and status counts for a task collection.
///
/// # Examples
///
/// ```rust
/// use pmdash::libs::stats::get_dashboard_stats;
///
/// let stats = get_dashboard_stats(&[], 50.0);
/// assert_eq!(stats.total_cost, 0.0);
/// ```
pub fn get_dashboard_stats(tasks: &[Task], hourly_rate: f64) -> DashboardStats {
    let total_hours: f64 = tasks.iter().map(Task::hours).sum();
    DashboardStats {
        total_hours,
        total_cost: total_hours * hourly_rate,
        status_counts: count_statuses(tasks),
    }
}

pub fn count_statuses(tasks: &[Task]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for task in tasks {
        *counts.entry(task.status.clone().unwrap_or_default()).or_insert(0) += 1;
    }
    counts
}

/// The stat cards shown at the top of the dashboard and project pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCards {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub in_progress_tasks: usize,
    pub blocked_tasks: usize,
    pub total_hours: f64,
    pub total_cost: f64,
}

impl StatCards {
    pub fn from_stats(total_tasks: usize, stats: &DashboardStats) -> Self {
        Self {
            total_tasks,
            completed_tasks: stats.count(STATUS_COMPLETED),
            in_progress_tasks: stats.count(STATUS_IN_PROGRESS),
            blocked_tasks: stats.count(STATUS_BLOCKED),
            total_hours: stats.total_hours,
            total_cost: stats.total_cost,
        }
    }
}

/// Hours per project and per `project::phase` pair.
///
/// `by_project` holds the same phase hours as `phases`, nested under the
/// project they belong to.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectPhaseTotals {
    pub projects: BTreeMap<String, f64>,
    pub phases: BTreeMap<String, f64>,
    pub by_project: BTreeMap<String, BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseHours {
    pub phase: String,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectHours {
    pub project: String,
    pub hours: f64,
    pub phases: Vec<PhaseHours>,
}

impl ProjectPhaseTotals {
    /// Projects by hours, highest first, each with its phases by hours.
    pub fn ranked(&self) -> Vec<ProjectHours> {
        let mut projects: Vec<ProjectHours> = self
            .projects
            .iter()
            .map(|(project, hours)| {
                let mut phases: Vec<PhaseHours> = self
                    .by_project
                    .get(project)
                    .into_iter()
                    .flatten()
                    .map(|(phase, hours)| PhaseHours { phase: phase.clone(), hours: *hours })
                    .collect();
                phases.sort_by(|a, b| b.hours.partial_cmp(&a.hours).unwrap_or(Ordering::Equal));
                ProjectHours { project: project.clone(), hours: *hours, phases }
            })
            .collect();
        projects.sort_by(|a, b| b.hours.partial_cmp(&a.hours).unwrap_or(Ordering::Equal));
        projects
    }
}

/// Rolls hours up per project and per phase within each project.
///
/// Phase keys are `"{project}::{phase}"` so that same-named phases of
/// different projects stay apart.
pub fn build_project_phase_totals(tasks: &[Task]) -> ProjectPhaseTotals {
    let mut totals = ProjectPhaseTotals::default();
    for task in tasks {
        let project = task.project.as_deref().filter(|p| !p.is_empty()).unwrap_or(NO_PROJECT);
        let phase = task.phase.as_deref().filter(|p| !p.is_empty()).unwrap_or(MISSING);
        let hours = task.hours();

        *totals.projects.entry(project.to_string()).or_insert(0.0) += hours;
        *totals.phases.entry(format!("{}::{}", project, phase)).or_insert(0.0) += hours;
        *totals
            .by_project
            .entry(project.to_string())
            .or_default()
            .entry(phase.to_string())
            .or_insert(0.0) += hours;
    }
    totals
}

/// Distinct values available to each filter control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub statuses: Vec<String>,
    pub owners: Vec<String>,
    pub phases: Vec<String>,
    pub projects: Vec<String>,
}

/// Sorted distinct non-empty values per filterable field.
pub fn build_filter_options(tasks: &[Task]) -> FilterOptions {
    FilterOptions {
        statuses: distinct(tasks, |t| t.status.as_deref()),
        owners: distinct(tasks, |t| t.owner.as_deref()),
        phases: distinct(tasks, |t| t.phase.as_deref()),
        projects: distinct(tasks, |t| t.project.as_deref()),
    }
}

fn distinct<'a>(tasks: &'a [Task], field: impl Fn(&'a Task) -> Option<&'a str>) -> Vec<String> {
    tasks
        .iter()
        .filter_map(field)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Categorical task field used for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GroupKey {
    Project,
    Phase,
    Owner,
    Status,
}

impl GroupKey {
    fn value<'a>(&self, task: &'a Task) -> Option<&'a str> {
        match self {
            GroupKey::Project => task.project.as_deref(),
            GroupKey::Phase => task.phase.as_deref(),
            GroupKey::Owner => task.owner.as_deref(),
            GroupKey::Status => task.status.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GroupTotals {
    pub hours: f64,
    pub count: usize,
}

/// Hours and task count per value of `key`; missing values group under `—`.
pub fn aggregate(tasks: &[Task], key: GroupKey) -> BTreeMap<String, GroupTotals> {
    let mut groups: BTreeMap<String, GroupTotals> = BTreeMap::new();
    for task in tasks {
        let value = key.value(task).filter(|v| !v.is_empty()).unwrap_or(MISSING);
        let group = groups.entry(value.to_string()).or_default();
        group.hours += task.hours();
        group.count += 1;
    }
    groups
}

/// One row of the "projects" panel on the home dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub project_id: String,
    pub project: String,
    pub count: usize,
    pub in_progress: usize,
    pub hours: f64,
}

/// Task count, in-progress count and hours for every project, in project order.
pub fn build_project_summaries(tasks: &[Task], projects: &[Project]) -> Vec<ProjectSummary> {
    sort_projects(projects)
        .into_iter()
        .map(|project| {
            let owned: Vec<&Task> = tasks.iter().filter(|t| t.project_id.as_deref() == Some(project.id.as_str())).collect();
            ProjectSummary {
                count: owned.len(),
                in_progress: owned.iter().filter(|t| t.status.as_deref() == Some(STATUS_IN_PROGRESS)).count(),
                hours: owned.iter().map(|t| t.hours()).sum(),
                project: if project.name.is_empty() { project.id.clone() } else { project.name.clone() },
                project_id: project.id,
            }
        })
        .collect()
}

/// The `limit` most recently started tasks; ties go to the higher id.
pub fn recent_tasks(tasks: &[Task], limit: usize) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| {
        b.start_timestamp()
            .cmp(&a.start_timestamp())
            .then_with(|| b.id.cmp(&a.id))
    });
    sorted.truncate(limit);
    sorted
}
