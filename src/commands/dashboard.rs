//! Home dashboard: stat cards, hours per project and phase, project list and
//! the most recent tasks, all computed over the filtered task list.

use super::args::{describe_filters, DataArgs, FilterArgs, Workspace};
use super::ticktick::{show_panel, Panel};
use crate::{
    libs::{
        dashboard::DASHBOARD_FILTERS_KEY,
        messages::Message,
        stats::{build_project_phase_totals, build_project_summaries, get_dashboard_stats, recent_tasks, StatCards},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Number of recent tasks to list
    #[arg(long, default_value_t = 5)]
    recent: usize,

    /// Also show the TickTick panel
    #[arg(long)]
    ticktick: bool,

    #[command(flatten)]
    data: DataArgs,

    #[command(flatten)]
    filters: FilterArgs,
}

pub async fn cmd(args: DashboardArgs) -> Result<()> {
    let workspace = Workspace::load(&args.data)?;
    let prefs = workspace.prefs.as_ref();

    let view = args.filters.resolve(prefs, DASHBOARD_FILTERS_KEY);
    let visible = view.apply(&workspace.tasks);
    let stats = get_dashboard_stats(&visible, workspace.hourly_rate());

    msg_print!(Message::DashboardHeader, true);
    if !view.filters.is_empty() {
        msg_info!(Message::ActiveFilters(describe_filters(&view.filters)));
    }
    View::stat_cards(&StatCards::from_stats(visible.len(), &stats));

    msg_print!(Message::ProjectPhaseHeader, true);
    View::project_phases(&build_project_phase_totals(&visible).ranked());

    // Project rows describe the whole portfolio, not the filtered slice.
    msg_print!(Message::ProjectSummariesHeader, true);
    View::project_summaries(&build_project_summaries(&workspace.tasks, &workspace.fixtures.projects));

    msg_print!(Message::RecentTasksHeader, true);
    if visible.is_empty() {
        msg_print!(Message::TasksNotFound);
    } else {
        View::tasks(&recent_tasks(&visible, args.recent));
    }

    args.filters.persist(prefs, DASHBOARD_FILTERS_KEY, &view);

    if args.ticktick {
        show_panel(&workspace.config, prefs, &Panel::home(), None, false).await?;
    }
    Ok(())
}
