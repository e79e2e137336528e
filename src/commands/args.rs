//! Arguments and loading shared by the dashboard commands.

use crate::db::{fixtures::Fixtures, preferences::Preferences};
use crate::libs::config::Config;
use crate::libs::dashboard::DashboardView;
use crate::libs::filter::{FilterSpec, SavedFilters};
use crate::libs::messages::Message;
use crate::libs::sort::{SortDir, SortKey, SortState};
use crate::libs::task::Task;
use crate::{msg_bail_anyhow, msg_debug, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Args)]
pub struct DataArgs {
    /// Fixture directory, overriding `dashboard.data_dir`
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// Filter and sort flags of a task table.
///
/// Flags override the filters saved for the view; `--save` stores the
/// result, `--reset` ignores (and without `--save` deletes) the saved ones.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive text matched against title and notes
    #[arg(short, long)]
    pub search: Option<String>,
    #[arg(long, value_delimiter = ',')]
    pub status: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub owner: Vec<String>,
    #[arg(long, value_delimiter = ',')]
    pub phase: Vec<String>,
    /// Project names
    #[arg(long = "in-project", value_delimiter = ',')]
    pub project: Vec<String>,
    /// Range start, yyyy-mm-dd
    #[arg(long)]
    pub from: Option<String>,
    /// Range end, yyyy-mm-dd
    #[arg(long)]
    pub to: Option<String>,
    #[arg(long)]
    pub clear_dates: bool,
    #[arg(long, value_enum)]
    pub sort: Option<SortKey>,
    #[arg(long, value_enum)]
    pub dir: Option<SortDir>,
    #[arg(long)]
    pub save: bool,
    #[arg(long)]
    pub reset: bool,
}

impl FilterArgs {
    /// View state: the filters saved under `key`, overridden by the flags.
    pub fn resolve(&self, prefs: Option<&Preferences>, key: &str) -> DashboardView {
        let saved = match (self.reset, prefs) {
            (false, Some(prefs)) => prefs.load_json::<SavedFilters>(key),
            _ => None,
        };
        let mut spec = saved.map(SavedFilters::into_spec).unwrap_or_default();

        if let Some(search) = &self.search {
            spec.search = search.clone();
        }
        for (flag, target) in [
            (&self.status, &mut spec.status),
            (&self.owner, &mut spec.owner),
            (&self.phase, &mut spec.phase),
            (&self.project, &mut spec.project),
        ] {
            if !flag.is_empty() {
                *target = flag.clone();
            }
        }
        if let Some(from) = &self.from {
            spec.date_start = from.clone();
        }
        if let Some(to) = &self.to {
            spec.date_end = to.clone();
        }

        let mut view = DashboardView::new(SortState::default(), spec);
        if self.clear_dates {
            view.clear_dates();
        }
        if let Some(key) = self.sort {
            view.toggle_sort(key);
        }
        if let Some(dir) = self.dir {
            view.sort.dir = dir;
        }
        view
    }

    pub fn persist(&self, prefs: Option<&Preferences>, key: &str, view: &DashboardView) {
        let Some(prefs) = prefs else {
            return;
        };

        if self.save {
            prefs.save_json(key, &view.filters.to_saved());
            msg_success!(Message::FiltersSaved(key.to_string()));
        } else if self.reset {
            match prefs.remove(key) {
                Ok(true) => msg_info!(Message::FiltersCleared(key.to_string())),
                Ok(false) => {}
                Err(error) => tracing::warn!(key, %error, "failed to remove saved filters"),
            }
        }
    }
}

/// One-line description of the active filters.
pub fn describe_filters(spec: &FilterSpec) -> String {
    let mut parts = Vec::new();
    if !spec.search.trim().is_empty() {
        parts.push(format!("search={}", spec.search.trim()));
    }
    for (name, values) in [
        ("status", &spec.status),
        ("owner", &spec.owner),
        ("phase", &spec.phase),
        ("project", &spec.project),
    ] {
        let values: Vec<&str> = values.iter().map(String::as_str).filter(|v| !v.is_empty()).collect();
        if !values.is_empty() {
            parts.push(format!("{}={}", name, values.join("|")));
        }
    }
    if !spec.date_start.is_empty() || !spec.date_end.is_empty() {
        parts.push(format!("dates={}..{}", spec.date_start, spec.date_end));
    }
    parts.join(", ")
}

/// Config, fixtures and joined tasks for one command run.
pub struct Workspace {
    pub config: Config,
    pub fixtures: Fixtures,
    pub tasks: Vec<Task>,
    pub prefs: Option<Preferences>,
}

impl Workspace {
    pub fn load(data: &DataArgs) -> Result<Self> {
        let config = Config::read()?;
        let dir = data.data_dir.clone().unwrap_or_else(|| config.data_dir());
        if !dir.is_dir() {
            msg_bail_anyhow!(Message::DataDirNotFound(dir.display().to_string()));
        }

        let fixtures = Fixtures::load(&dir)?;
        let tasks = fixtures.tasks(&config.legacy_fallback());
        msg_debug!(Message::FixturesLoaded(tasks.len(), dir.display().to_string()));

        Ok(Self {
            config,
            fixtures,
            tasks,
            prefs: open_preferences(),
        })
    }

    pub fn hourly_rate(&self) -> f64 {
        self.config.hourly_rate()
    }
}

/// The preferences store, or `None` when it cannot be opened.
pub fn open_preferences() -> Option<Preferences> {
    match Preferences::new() {
        Ok(prefs) => Some(prefs),
        Err(error) => {
            tracing::warn!(%error, "preferences store unavailable");
            None
        }
    }
}

/// Show-completed toggle of a to-do or milestone list.
///
/// An explicit flag wins and is remembered under `key`; otherwise the saved
/// value is used, defaulting to hidden.
pub fn show_completed(prefs: Option<&Preferences>, key: Option<&str>, flag: Option<bool>) -> bool {
    match (prefs, key, flag) {
        (Some(prefs), Some(key), Some(show)) => {
            prefs.save_json(key, &show);
            msg_debug!(Message::ShowCompletedSaved(show));
            show
        }
        (_, _, Some(show)) => show,
        (Some(prefs), Some(key), None) => prefs.load_json::<bool>(key).unwrap_or(false),
        _ => false,
    }
}
