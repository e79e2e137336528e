//! Task table with filters, sorting and optional group totals.

use super::args::{describe_filters, DataArgs, FilterArgs, Workspace};
use crate::{
    libs::{
        dashboard::DASHBOARD_FILTERS_KEY,
        messages::Message,
        stats::{aggregate, build_filter_options, GroupKey},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TasksArgs {
    /// Print hours and task counts grouped by this field
    #[arg(long, value_enum)]
    group_by: Option<GroupKey>,

    /// List the values each filter accepts
    #[arg(long)]
    options: bool,

    #[command(flatten)]
    data: DataArgs,

    #[command(flatten)]
    filters: FilterArgs,
}

pub fn cmd(args: TasksArgs) -> Result<()> {
    let workspace = Workspace::load(&args.data)?;
    let prefs = workspace.prefs.as_ref();

    if args.options {
        // Options come from every task so that a narrowed view can be widened again.
        msg_print!(Message::FilterOptionsHeader, true);
        View::filter_options(&build_filter_options(&workspace.tasks));
        return Ok(());
    }

    let view = args.filters.resolve(prefs, DASHBOARD_FILTERS_KEY);
    let visible = view.apply(&workspace.tasks);

    if !view.filters.is_empty() {
        msg_info!(Message::ActiveFilters(describe_filters(&view.filters)));
    }
    msg_print!(Message::TasksHeader(visible.len(), workspace.tasks.len()), true);
    if visible.is_empty() {
        msg_print!(Message::TasksNotFound);
    } else {
        View::tasks(&visible);
    }

    if let Some(key) = args.group_by {
        let label = format!("{:?}", key).to_lowercase();
        msg_print!(Message::GroupTotalsHeader(label), true);
        View::group_totals(&aggregate(&visible, key));
    }

    args.filters.persist(prefs, DASHBOARD_FILTERS_KEY, &view);
    Ok(())
}
