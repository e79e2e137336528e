//! Task filter engine.
//!
//! A [`FilterSpec`] combines a free-text term, four multi-select categorical
//! filters and a date range. Sub-filters are AND-ed together; values within
//! one categorical filter are OR-ed. Filtering never reorders tasks.
//!
//! ## Selection semantics
//!
//! An empty selection, or one that contains the empty string (the "all"
//! option of a select control), imposes no constraint. This keeps "nothing
//! selected" meaning "show everything" rather than "show nothing".
//!
//! ## Date range
//!
//! The range is active when either bound is set. A task spans
//! `[startDate, endDate]`, with `endDate` defaulting to `startDate`, and
//! matches when that span overlaps the range. Tasks without any date never
//! match an active range.
//!
//! ```rust
//! use pmdash::libs::filter::{apply_filters, FilterSpec};
//! use pmdash::libs::task::Task;
//!
//! let tasks = vec![Task { id: 1, title: "Deploy".into(), ..Default::default() }];
//! let spec = FilterSpec { search: "  DEPLOY ".into(), ..Default::default() };
//! assert_eq!(apply_filters(&tasks, &spec).len(), 1);
//! ```

use crate::libs::date::parse_input_date;
use crate::libs::task::Task;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    pub search: String,
    pub status: Vec<String>,
    pub owner: Vec<String>,
    pub phase: Vec<String>,
    pub project: Vec<String>,
    /// ISO `yyyy-mm-dd`, empty for an open lower bound.
    pub date_start: String,
    /// ISO `yyyy-mm-dd`, empty for an open upper bound.
    pub date_end: String,
}

/// Filter blob as persisted by the dashboard views.
///
/// Every field is optional. Older blobs carry a single `date` instead of a
/// range; it fills whichever bound is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl SavedFilters {
    pub fn into_spec(self) -> FilterSpec {
        let legacy_date = self.date.unwrap_or_default();
        FilterSpec {
            search: self.search.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            owner: self.owner.unwrap_or_default(),
            phase: self.phase.unwrap_or_default(),
            project: self.project.unwrap_or_default(),
            date_start: self.date_start.unwrap_or_else(|| legacy_date.clone()),
            date_end: self.date_end.unwrap_or(legacy_date),
        }
    }
}

impl FilterSpec {
    /// Persisted shape of this spec. The search term is stored lowercased and trimmed.
    pub fn to_saved(&self) -> SavedFilters {
        SavedFilters {
            search: Some(self.search.trim().to_lowercase()),
            status: Some(self.status.clone()),
            owner: Some(self.owner.clone()),
            phase: Some(self.phase.clone()),
            project: Some(self.project.clone()),
            date_start: Some(self.date_start.clone()),
            date_end: Some(self.date_end.clone()),
            date: None,
        }
    }

    /// True when no sub-filter is active.
    pub fn is_empty(&self) -> bool {
        CompiledFilter::new(self).is_noop()
    }
}

/// A [`FilterSpec`] with its term lowercased, selections normalized and
/// range bounds parsed once.
struct CompiledFilter<'a> {
    term: String,
    status: Vec<&'a str>,
    owner: Vec<&'a str>,
    phase: Vec<&'a str>,
    project: Vec<&'a str>,
    has_date_range: bool,
    range_start: i64,
    range_end: i64,
}

impl<'a> CompiledFilter<'a> {
    fn new(spec: &'a FilterSpec) -> Self {
        Self {
            term: spec.search.trim().to_lowercase(),
            status: normalize_selected(&spec.status),
            owner: normalize_selected(&spec.owner),
            phase: normalize_selected(&spec.phase),
            project: normalize_selected(&spec.project),
            has_date_range: !spec.date_start.is_empty() || !spec.date_end.is_empty(),
            range_start: parse_input_date(&spec.date_start, i64::MIN),
            range_end: parse_input_date(&spec.date_end, i64::MAX),
        }
    }

    fn is_noop(&self) -> bool {
        self.term.is_empty()
            && self.status.is_empty()
            && self.owner.is_empty()
            && self.phase.is_empty()
            && self.project.is_empty()
            && !self.has_date_range
    }

    fn matches(&self, task: &Task) -> bool {
        self.matches_term(task)
            && selected(&self.status, task.status.as_deref())
            && selected(&self.owner, task.owner.as_deref())
            && selected(&self.phase, task.phase.as_deref())
            && selected(&self.project, task.project.as_deref())
            && self.matches_date(task)
    }

    fn matches_term(&self, task: &Task) -> bool {
        if self.term.is_empty() {
            return true;
        }
        format!("{} {}", task.title, task.notes).to_lowercase().contains(&self.term)
    }

    fn matches_date(&self, task: &Task) -> bool {
        if !self.has_date_range {
            return true;
        }

        let task_start = task.start_timestamp();
        let task_end = match task.end_timestamp() {
            0 => task_start,
            end => end,
        };
        let has_task_date = task_start != 0 || task_end != 0;

        has_task_date && task_end >= self.range_start && task_start <= self.range_end
    }
}

/// Returns the tasks matching every active sub-filter, in input order.
pub fn apply_filters(tasks: &[Task], spec: &FilterSpec) -> Vec<Task> {
    let filter = CompiledFilter::new(spec);
    tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
}

fn normalize_selected(values: &[String]) -> Vec<&str> {
    if values.iter().any(|v| v.is_empty()) {
        return Vec::new();
    }
    values.iter().map(String::as_str).collect()
}

fn selected(values: &[&str], field: Option<&str>) -> bool {
    values.is_empty() || field.is_some_and(|f| values.contains(&f))
}
