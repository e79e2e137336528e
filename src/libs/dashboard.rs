//! View-model state of the task tables and the preference keys it is saved under.
//!
//! The engine modules are stateless. Whatever a view needs to remember between
//! renders (the sort column, the active filters, "show completed" toggles)
//! lives in values owned by the caller and is handed to the engine on every
//! call.

use crate::libs::filter::{apply_filters, FilterSpec};
use crate::libs::sort::{sort_tasks, SortKey, SortState};
use crate::libs::task::Task;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Filters of the home dashboard table.
pub const DASHBOARD_FILTERS_KEY: &str = "pm-dashboard-filters";
/// TickTick project chosen on the home dashboard.
pub const TICKTICK_KEY: &str = "pm-ticktick-project";

/// Sort and filter state of one task table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub sort: SortState,
    pub filters: FilterSpec,
}

impl DashboardView {
    pub fn new(sort: SortState, filters: FilterSpec) -> Self {
        Self { sort, filters }
    }

    /// Filters, then sorts, a copy of `tasks`.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        sort_tasks(&apply_filters(tasks, &self.filters), self.sort)
    }

    /// Column header click.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggle(key);
    }

    /// Clears both date bounds, leaving every other filter untouched.
    pub fn clear_dates(&mut self) {
        self.filters.date_start.clear();
        self.filters.date_end.clear();
    }
}

pub fn project_filters_key(project_id: &str) -> String {
    format!("pm-project-filters:{}", encode_uri_component(project_id))
}

pub fn project_ticktick_key(project_id: &str) -> String {
    format!("pm-ticktick-project-{}", encode_uri_component(project_id))
}

pub fn todos_show_completed_key(project_id: &str) -> String {
    format!("pm-project-todos:show-completed:{}", encode_uri_component(project_id))
}

pub fn milestones_show_completed_key(project_id: &str) -> String {
    format!("pm-project-milestones:show-completed:{}", encode_uri_component(project_id))
}

/// Bytes escaped by `encodeURIComponent`: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
