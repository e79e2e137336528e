//! Detail view of one project: its stat cards and tasks, to-dos, milestones
//! and the linked TickTick panel.
//!
//! Filters, show-completed toggles and the TickTick selection are stored per
//! project, so every project page keeps its own state.

use super::args::{describe_filters, show_completed, DataArgs, FilterArgs, Workspace};
use super::milestones::print_milestones;
use super::ticktick::{show_panel, Panel};
use super::todos::print_todos;
use crate::{
    api::ticktick::preferred_project,
    libs::{
        dashboard::{milestones_show_completed_key, project_filters_key, project_ticktick_key, todos_show_completed_key},
        messages::Message,
        milestone::{filter_milestones_by_project, sort_milestones, visible_milestones},
        stats::{build_project_phase_totals, get_dashboard_stats, StatCards},
        task::filter_tasks_by_project,
        todo::{filter_todos_by_project, sort_todos, visible_todos},
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Project id
    id: String,

    /// Include completed to-dos, remembered for this project
    #[arg(long)]
    show_completed_todos: Option<bool>,

    /// Include completed milestones, remembered for this project
    #[arg(long)]
    show_completed_milestones: Option<bool>,

    /// Also show the linked TickTick tasks
    #[arg(long)]
    ticktick: bool,

    /// Bypass the TickTick response cache
    #[arg(long)]
    refresh: bool,

    #[command(flatten)]
    data: DataArgs,

    #[command(flatten)]
    filters: FilterArgs,
}

pub async fn cmd(args: ProjectArgs) -> Result<()> {
    let workspace = Workspace::load(&args.data)?;
    let prefs = workspace.prefs.as_ref();
    let Some(project) = workspace.fixtures.project(&args.id) else {
        msg_bail_anyhow!(Message::ProjectNotFound(args.id.clone()));
    };

    let name = if project.name.is_empty() { project.id.clone() } else { project.name.clone() };
    msg_print!(Message::ProjectHeader(name), true);

    let filters_key = project_filters_key(&project.id);
    let view = args.filters.resolve(prefs, &filters_key);
    let project_tasks = filter_tasks_by_project(&workspace.tasks, &project.id);
    let visible = view.apply(&project_tasks);
    let stats = get_dashboard_stats(&visible, workspace.hourly_rate());

    if !view.filters.is_empty() {
        msg_info!(Message::ActiveFilters(describe_filters(&view.filters)));
    }
    View::stat_cards(&StatCards::from_stats(visible.len(), &stats));

    msg_print!(Message::ProjectPhaseHeader, true);
    View::project_phases(&build_project_phase_totals(&visible).ranked());

    msg_print!(Message::TasksHeader(visible.len(), project_tasks.len()), true);
    if visible.is_empty() {
        msg_print!(Message::TasksNotFound);
    } else {
        View::tasks(&visible);
    }
    args.filters.persist(prefs, &filters_key, &view);

    let show_todos = show_completed(prefs, Some(todos_show_completed_key(&project.id).as_str()), args.show_completed_todos);
    let todos = filter_todos_by_project(&workspace.fixtures.todos, Some(&project.id));
    print_todos(&visible_todos(&sort_todos(&todos), show_todos));

    let show_milestones = show_completed(
        prefs,
        Some(milestones_show_completed_key(&project.id).as_str()),
        args.show_completed_milestones,
    );
    let milestones = filter_milestones_by_project(&workspace.fixtures.milestones, Some(&project.id));
    print_milestones(&visible_milestones(&sort_milestones(&milestones), show_milestones));

    if args.ticktick {
        let panel = Panel {
            key: project_ticktick_key(&project.id),
            preferred: preferred_project(Some(project)),
            column: project.ticktick_column_id.as_deref(),
        };
        show_panel(&workspace.config, prefs, &panel, None, args.refresh).await?;
    }
    Ok(())
}
