//! Display text for [`Message`].
//!
//! All user-facing text of the CLI is defined here, so commands only ever
//! name a message variant and its parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleDashboard => "Dashboard settings".to_string(),
            Message::ConfigModuleTickTick => "TickTick settings".to_string(),
            Message::ConfigModuleLegacy => "Legacy project mapping".to_string(),
            Message::PromptSelectModules => "Select modules to configure (space to select, enter to confirm)".to_string(),
            Message::PromptDataDir => "Fixture directory".to_string(),
            Message::PromptHourlyRate => "Hourly rate (EUR)".to_string(),
            Message::PromptTickTickApiUrl => "TickTick API URL".to_string(),
            Message::PromptTickTickToken => "TickTick access token".to_string(),
            Message::PromptTickTickCacheTtl => "TickTick cache lifetime (seconds)".to_string(),
            Message::PromptLegacyPhases => "Phases of tasks without project (comma separated)".to_string(),
            Message::PromptLegacyProject => "Project assigned to those tasks".to_string(),

            // === FIXTURE MESSAGES ===
            Message::FixturesLoaded(count, dir) => format!("Loaded {} task(s) from {}", count, dir),
            Message::FixtureMissing(file) => format!("Fixture {} not found, using an empty list", file),
            Message::DataDirNotFound(dir) => format!("Data directory not found: {}", dir),

            // === DASHBOARD MESSAGES ===
            Message::DashboardHeader => "Project dashboard".to_string(),
            Message::ProjectPhaseHeader => "Hours by project and phase".to_string(),
            Message::ProjectSummariesHeader => "Projects".to_string(),
            Message::RecentTasksHeader => "Recent tasks".to_string(),
            Message::FilterOptionsHeader => "Available filter values".to_string(),
            Message::GroupTotalsHeader(key) => format!("Totals by {}", key),
            Message::ActiveFilters(summary) => format!("Filters: {}", summary),
            Message::TasksHeader(shown, total) => format!("Tasks ({} of {})", shown, total),
            Message::TasksNotFound => "No tasks match the current filters.".to_string(),
            Message::FiltersSaved(key) => format!("Filters saved under {}", key),
            Message::FiltersCleared(key) => format!("Saved filters removed from {}", key),

            // === PROJECT MESSAGES ===
            Message::ProjectHeader(name) => format!("Project: {}", name),
            Message::ProjectNotFound(id) => format!("Project {} not found", id),

            // === HOURS MESSAGES ===
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::HoursHeader(id, title) => format!("Hours of task #{} {}", id, title),
            Message::HoursNotFound => "No hours logged for this task.".to_string(),

            // === TODO AND MILESTONE MESSAGES ===
            Message::TodosHeader => "To-dos".to_string(),
            Message::TodosNotFound => "No pending to-dos.".to_string(),
            Message::MilestonesHeader => "Milestones".to_string(),
            Message::MilestonesNotFound => "No pending milestones.".to_string(),
            Message::ShowCompletedSaved(show) => {
                if *show {
                    "Completed items will be shown".to_string()
                } else {
                    "Completed items will be hidden".to_string()
                }
            }

            // === TICKTICK MESSAGES ===
            Message::TickTickProjectsHeader => "TickTick projects".to_string(),
            Message::TickTickTasksHeader(project) => format!("TickTick tasks of {}", project),
            Message::TickTickNoProjects => "No TickTick projects available.".to_string(),
            Message::TickTickNoTasks => "No open TickTick tasks.".to_string(),
            Message::TickTickMissingToken => "TickTick access token is not configured. Set TICKTICK_ACCESS_TOKEN or run `pmdash init`.".to_string(),
            Message::TickTickRequestFailed => "Could not load data from TickTick. Run with PMDASH_DEBUG=1 for details.".to_string(),
            Message::TickTickProjectSaved(id) => format!("TickTick project {} saved as default", id),
            Message::TickTickCacheHit(key) => format!("TickTick cache hit for {}", key),
            Message::TickTickCacheCleared(count) => format!("TickTick cache cleared ({} projects)", count),

            // === PREFERENCE MESSAGES ===
            Message::PreferenceReadFailed(key, error) => format!("Could not read preference {}: {}", key, error),
            Message::PreferenceWriteFailed(key, error) => format!("Could not save preference {}: {}", key, error),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportNoTasks => "Nothing to export: no tasks match the current filters.".to_string(),
        };

        write!(f, "{}", text)
    }
}
