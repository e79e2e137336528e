//! Project milestones in their configured order.

use super::args::{show_completed, DataArgs, Workspace};
use crate::{
    libs::{
        dashboard::milestones_show_completed_key,
        messages::Message,
        milestone::{filter_milestones_by_project, sort_milestones, visible_milestones, Milestone},
        view::View,
    },
    msg_bail_anyhow, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MilestonesArgs {
    /// Project id; all milestones when omitted
    #[arg(short, long)]
    project: Option<String>,

    /// Include completed milestones, remembered per project
    #[arg(long)]
    show_completed: Option<bool>,

    #[command(flatten)]
    data: DataArgs,
}

pub fn cmd(args: MilestonesArgs) -> Result<()> {
    let workspace = Workspace::load(&args.data)?;
    if let Some(id) = &args.project {
        if workspace.fixtures.project(id).is_none() {
            msg_bail_anyhow!(Message::ProjectNotFound(id.clone()));
        }
    }

    let key = args.project.as_deref().map(milestones_show_completed_key);
    let show = show_completed(workspace.prefs.as_ref(), key.as_deref(), args.show_completed);

    let milestones = filter_milestones_by_project(&workspace.fixtures.milestones, args.project.as_deref());
    print_milestones(&visible_milestones(&sort_milestones(&milestones), show));
    Ok(())
}

pub(crate) fn print_milestones(milestones: &[Milestone]) {
    msg_print!(Message::MilestonesHeader, true);
    if milestones.is_empty() {
        msg_print!(Message::MilestonesNotFound);
    } else {
        View::milestones(milestones);
    }
}
