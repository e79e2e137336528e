//! Hour log of a single task, newest entries first.

use super::args::{DataArgs, Workspace};
use crate::{
    libs::{formatter::fmt_hours_summary, messages::Message, task::sort_entries, view::View},
    msg_error_anyhow, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HoursArgs {
    task_id: u64,

    #[command(flatten)]
    data: DataArgs,
}

pub fn cmd(args: HoursArgs) -> Result<()> {
    let workspace = Workspace::load(&args.data)?;
    let task = workspace
        .tasks
        .iter()
        .find(|task| task.id == args.task_id)
        .ok_or_else(|| msg_error_anyhow!(Message::TaskNotFoundWithId(args.task_id)))?;

    msg_print!(Message::HoursHeader(task.id, task.title.clone()), true);
    if task.entries.is_empty() {
        msg_print!(Message::HoursNotFound);
        return Ok(());
    }

    View::hours(&sort_entries(&task.entries));
    msg_print!(fmt_hours_summary(task.hours(), task.entries.len()));
    if !task.notes.is_empty() {
        msg_print!(task.notes, true);
    }
    Ok(())
}
