pub mod args;
pub mod dashboard;
pub mod export;
pub mod hours;
pub mod init;
pub mod milestones;
pub mod project;
pub mod tasks;
pub mod ticktick;
pub mod todos;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show the project dashboard")]
    Dashboard(dashboard::DashboardArgs),
    #[command(about = "List, filter and sort tasks")]
    Tasks(tasks::TasksArgs),
    #[command(about = "Show one project with its to-dos and milestones")]
    Project(project::ProjectArgs),
    #[command(about = "Show the hour log of a task")]
    Hours(hours::HoursArgs),
    #[command(about = "List project to-dos")]
    Todos(todos::TodosArgs),
    #[command(about = "List project milestones")]
    Milestones(milestones::MilestonesArgs),
    #[command(about = "Browse TickTick projects and tasks", name = "ticktick")]
    TickTick(ticktick::TickTickArgs),
    #[command(about = "Export the filtered task list")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Dashboard(args) => dashboard::cmd(args).await,
            Commands::Tasks(args) => tasks::cmd(args),
            Commands::Project(args) => project::cmd(args).await,
            Commands::Hours(args) => hours::cmd(args),
            Commands::Todos(args) => todos::cmd(args),
            Commands::Milestones(args) => milestones::cmd(args),
            Commands::TickTick(args) => ticktick::cmd(args).await,
            Commands::Export(args) => export::cmd(args),
        }
    }
}
