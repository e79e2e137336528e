//! TickTick projects and tasks.
//!
//! The project shown is chosen like the dashboard panel does it: the one saved
//! for the view, then the TickTick project linked to the dashboard project,
//! then the first available.

use super::args::{open_preferences, DataArgs, Workspace};
use crate::{
    api::{
        ticktick::{preferred_project, select_default_project},
        ProxyStatus, TickTick,
    },
    db::{preferences::Preferences, ticktick_cache::TickTickCache},
    libs::{
        config::Config,
        dashboard::{project_ticktick_key, TICKTICK_KEY},
        messages::Message,
        view::View,
    },
    msg_bail_anyhow, msg_error, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TickTickArgs {
    #[command(subcommand)]
    command: TickTickCommand,
}

#[derive(Debug, Subcommand)]
enum TickTickCommand {
    #[command(about = "List TickTick projects")]
    Projects(ProjectsArgs),
    #[command(about = "Show open tasks of a TickTick project")]
    Tasks(PanelArgs),
    #[command(about = "Forget cached TickTick tasks")]
    ClearCache,
}

#[derive(Debug, Args)]
struct ProjectsArgs {
    /// Dashboard project whose TickTick selection is marked
    #[arg(short, long)]
    project: Option<String>,
}

#[derive(Debug, Args)]
struct PanelArgs {
    /// Dashboard project whose TickTick selection is used
    #[arg(short, long)]
    project: Option<String>,

    /// TickTick project id, overriding the saved selection
    #[arg(long)]
    id: Option<String>,

    /// Kanban column id
    #[arg(long)]
    column: Option<String>,

    /// Fetch again even if cached tasks are still fresh
    #[arg(long)]
    refresh: bool,

    /// Remember `--id` as the selection of this view
    #[arg(long)]
    save: bool,

    #[command(flatten)]
    data: DataArgs,
}

/// Where the selection of a TickTick panel is stored and what it defaults to.
pub struct Panel<'a> {
    pub key: String,
    pub preferred: Option<&'a str>,
    pub column: Option<&'a str>,
}

impl<'a> Panel<'a> {
    pub fn home() -> Self {
        Self {
            key: TICKTICK_KEY.to_string(),
            preferred: None,
            column: None,
        }
    }
}

pub async fn cmd(args: TickTickArgs) -> Result<()> {
    match args.command {
        TickTickCommand::Projects(projects_args) => projects(projects_args).await,
        TickTickCommand::Tasks(panel_args) => tasks(panel_args).await,
        TickTickCommand::ClearCache => clear_cache(),
    }
}

/// Client for the configured account, backed by the cache table when the
/// database can be opened.
pub fn client(config: &Config) -> TickTick {
    let client = TickTick::new(&config.ticktick_config());
    match TickTickCache::new() {
        Ok(store) => client.with_store(store),
        Err(error) => {
            tracing::warn!(%error, "TickTick cache unavailable");
            client
        }
    }
}

fn clear_cache() -> Result<()> {
    let config = Config::read()?;
    let removed = client(&config).clear_cache()?;
    msg_success!(Message::TickTickCacheCleared(removed));
    Ok(())
}

async fn projects(args: ProjectsArgs) -> Result<()> {
    let config = Config::read()?;
    let prefs = open_preferences();
    let client = client(&config);

    let response = client.projects().await;
    if !report_status(response.status) {
        return Ok(());
    }
    if response.projects.is_empty() {
        msg_warning!(Message::TickTickNoProjects);
        return Ok(());
    }

    let key = args.project.as_deref().map(project_ticktick_key).unwrap_or_else(|| TICKTICK_KEY.to_string());
    let saved = prefs.as_ref().and_then(|prefs| prefs.load_value(&key));
    let selected = select_default_project(&response.projects, saved.as_deref(), None);

    msg_print!(Message::TickTickProjectsHeader, true);
    View::ticktick_projects(&response.projects, selected.map(|project| project.id.as_str()));
    Ok(())
}

async fn tasks(args: PanelArgs) -> Result<()> {
    let config = Config::read()?;

    // A dashboard project brings its own storage key, linked project and column.
    let workspace = args.project.as_ref().map(|_| Workspace::load(&args.data)).transpose()?;
    let standalone = if workspace.is_none() { open_preferences() } else { None };
    let prefs = workspace.as_ref().and_then(|w| w.prefs.as_ref()).or(standalone.as_ref());

    let project = match (&args.project, &workspace) {
        (Some(id), Some(workspace)) => match workspace.fixtures.project(id) {
            Some(project) => Some(project),
            None => msg_bail_anyhow!(Message::ProjectNotFound(id.clone())),
        },
        _ => None,
    };

    let panel = match (&args.project, project) {
        (Some(id), project) => Panel {
            key: project_ticktick_key(id),
            preferred: preferred_project(project),
            column: args.column.as_deref().or(project.and_then(|p| p.ticktick_column_id.as_deref())),
        },
        (None, _) => Panel {
            column: args.column.as_deref(),
            ..Panel::home()
        },
    };

    if args.save {
        if let (Some(prefs), Some(id)) = (prefs, args.id.as_deref()) {
            prefs.save_value(&panel.key, id);
            msg_success!(Message::TickTickProjectSaved(id.to_string()));
        }
    }

    show_panel(&config, prefs, &panel, args.id.as_deref(), args.refresh).await
}

/// Loads the projects, resolves the selected one and prints its open tasks.
pub async fn show_panel(
    config: &Config,
    prefs: Option<&Preferences>,
    panel: &Panel<'_>,
    project_id: Option<&str>,
    refresh: bool,
) -> Result<()> {
    let client = client(config);

    let response = client.projects().await;
    if !report_status(response.status) {
        return Ok(());
    }

    let saved = prefs.and_then(|prefs| prefs.load_value(&panel.key));
    let saved = project_id.map(str::to_string).or(saved);
    let Some(selected) = select_default_project(&response.projects, saved.as_deref(), panel.preferred) else {
        msg_warning!(Message::TickTickNoProjects);
        return Ok(());
    };

    let tasks = client.tasks(&selected.id, panel.column, refresh).await;
    if !report_status(tasks.status) {
        return Ok(());
    }

    let name = if selected.name.is_empty() { selected.id.clone() } else { selected.name.clone() };
    msg_print!(Message::TickTickTasksHeader(name), true);
    if tasks.tasks.is_empty() {
        msg_print!(Message::TickTickNoTasks);
    } else {
        View::ticktick_tasks(&tasks.tasks);
    }
    Ok(())
}

/// Prints the problem for a non-ready envelope; true when the payload is usable.
fn report_status(status: ProxyStatus) -> bool {
    match status {
        ProxyStatus::Ready => true,
        ProxyStatus::MissingToken => {
            msg_warning!(Message::TickTickMissingToken);
            false
        }
        ProxyStatus::Error => {
            msg_error!(Message::TickTickRequestFailed);
            false
        }
    }
}
