//! Export of the filtered, sorted task list.

use super::args::{DataArgs, FilterArgs, Workspace};
use crate::{
    libs::{
        dashboard::DASHBOARD_FILTERS_KEY,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    data: DataArgs,

    #[command(flatten)]
    filters: FilterArgs,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let workspace = Workspace::load(&args.data)?;
    let view = args.filters.resolve(workspace.prefs.as_ref(), DASHBOARD_FILTERS_KEY);
    let visible = view.apply(&workspace.tasks);

    if visible.is_empty() {
        msg_warning!(Message::ExportNoTasks);
        return Ok(());
    }

    Exporter::new(args.format, args.output).export_tasks(&visible, workspace.hourly_rate())
}
