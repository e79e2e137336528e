//! Project to-dos ordered by due date.

use super::args::{show_completed, DataArgs, Workspace};
use crate::{
    libs::{
        dashboard::todos_show_completed_key,
        messages::Message,
        todo::{filter_todos_by_project, sort_todos, visible_todos, Todo},
        view::View,
    },
    msg_bail_anyhow, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TodosArgs {
    /// Project id; all to-dos when omitted
    #[arg(short, long)]
    project: Option<String>,

    /// Include completed to-dos, remembered per project
    #[arg(long)]
    show_completed: Option<bool>,

    #[command(flatten)]
    data: DataArgs,
}

pub fn cmd(args: TodosArgs) -> Result<()> {
    let workspace = Workspace::load(&args.data)?;
    if let Some(id) = &args.project {
        if workspace.fixtures.project(id).is_none() {
            msg_bail_anyhow!(Message::ProjectNotFound(id.clone()));
        }
    }

    let key = args.project.as_deref().map(todos_show_completed_key);
    let show = show_completed(workspace.prefs.as_ref(), key.as_deref(), args.show_completed);

    let todos = filter_todos_by_project(&workspace.fixtures.todos, args.project.as_deref());
    print_todos(&visible_todos(&sort_todos(&todos), show));
    Ok(())
}

pub(crate) fn print_todos(todos: &[Todo]) {
    msg_print!(Message::TodosHeader, true);
    if todos.is_empty() {
        msg_print!(Message::TodosNotFound);
    } else {
        View::todos(todos);
    }
}
