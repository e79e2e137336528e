use super::formatter::{fmt_currency, fmt_number, format_due_date, or_placeholder, truncate_note, PLACEHOLDER};
use super::milestone::Milestone;
use super::stats::{FilterOptions, GroupTotals, ProjectHours, ProjectSummary, StatCards};
use super::task::{HourEntry, Task};
use super::todo::{classify_due, Todo};
use crate::api::ticktick::{TickTickProject, TickTickTask};
use chrono::Local;
use prettytable::{row, Table};
use std::collections::BTreeMap;

const NOTE_WIDTH: usize = 40;

/// Terminal tables for every dashboard panel.
pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "PROJECT", "PHASE", "STATUS", "OWNER", "START", "END", "HOURS", "NOTES"]);
        for task in tasks {
            let last_note = task.notes.lines().last().unwrap_or("");
            table.add_row(row![
                task.id,
                task.title,
                or_placeholder(task.project.as_deref()),
                or_placeholder(task.phase.as_deref()),
                or_placeholder(task.status.as_deref()),
                or_placeholder(task.owner.as_deref()),
                or_placeholder(task.start_date.as_deref()),
                or_placeholder(task.end_date.as_deref()),
                r->fmt_number(task.hours()),
                truncate_note(last_note, NOTE_WIDTH)
            ]);
        }
        table.printstd();
    }

    pub fn stat_cards(cards: &StatCards) {
        let mut table = Table::new();

        table.add_row(row!["TASKS", "COMPLETED", "IN PROGRESS", "BLOCKED", "HOURS", "COST"]);
        table.add_row(row![
            cards.total_tasks,
            cards.completed_tasks,
            cards.in_progress_tasks,
            cards.blocked_tasks,
            fmt_number(cards.total_hours),
            fmt_currency(cards.total_cost)
        ]);
        table.printstd();
    }

    /// Projects by hours with their phases indented underneath.
    pub fn project_phases(projects: &[ProjectHours]) {
        let mut table = Table::new();

        table.add_row(row!["PROJECT / PHASE", "HOURS"]);
        for project in projects {
            table.add_row(row![b->project.project, r->fmt_number(project.hours)]);
            for phase in &project.phases {
                table.add_row(row![format!("  {}", phase.phase), r->fmt_number(phase.hours)]);
            }
        }
        table.printstd();
    }

    pub fn project_summaries(summaries: &[ProjectSummary]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "PROJECT", "TASKS", "IN PROGRESS", "HOURS"]);
        for summary in summaries {
            table.add_row(row![
                summary.project_id,
                summary.project,
                summary.count,
                summary.in_progress,
                r->fmt_number(summary.hours)
            ]);
        }
        table.printstd();
    }

    pub fn group_totals(groups: &BTreeMap<String, GroupTotals>) {
        let mut table = Table::new();

        table.add_row(row!["VALUE", "TASKS", "HOURS"]);
        for (value, totals) in groups {
            table.add_row(row![value, totals.count, r->fmt_number(totals.hours)]);
        }
        table.printstd();
    }

    pub fn filter_options(options: &FilterOptions) {
        let mut table = Table::new();

        table.add_row(row!["FILTER", "VALUES"]);
        for (name, values) in [
            ("status", &options.statuses),
            ("owner", &options.owners),
            ("phase", &options.phases),
            ("project", &options.projects),
        ] {
            let values = if values.is_empty() { PLACEHOLDER.to_string() } else { values.join(", ") };
            table.add_row(row![name, values]);
        }
        table.printstd();
    }

    pub fn hours(entries: &[HourEntry]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "HOURS", "NOTE"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                or_placeholder(entry.date.as_deref()),
                r->entry.hours.map(fmt_number).unwrap_or_else(|| PLACEHOLDER.to_string()),
                or_placeholder(entry.note.as_deref())
            ]);
        }
        table.printstd();
    }

    pub fn todos(todos: &[Todo]) {
        let now = Local::now();
        let mut table = Table::new();

        table.add_row(row!["TITLE", "DUE", "WHEN", "STATUS"]);
        for todo in todos {
            table.add_row(row![
                todo.title,
                or_placeholder(todo.due_date.as_deref()),
                classify_due(todo.due_date.as_deref(), now).as_str(),
                or_placeholder(todo.status.as_deref())
            ]);
        }
        table.printstd();
    }

    pub fn milestones(milestones: &[Milestone]) {
        let mut table = Table::new();

        table.add_row(row!["#", "TITLE", "STATUS", "DETAILS"]);
        for milestone in milestones {
            let order = milestone.order.map(fmt_number).unwrap_or_else(|| PLACEHOLDER.to_string());
            table.add_row(row![
                order,
                milestone.title,
                or_placeholder(milestone.status.as_deref()),
                truncate_note(milestone.details.as_deref().unwrap_or(""), NOTE_WIDTH)
            ]);
        }
        table.printstd();
    }

    /// `selected` marks the project the panel would load by default.
    pub fn ticktick_projects(projects: &[TickTickProject], selected: Option<&str>) {
        let mut table = Table::new();

        table.add_row(row!["", "ID", "NAME"]);
        for project in projects {
            let marker = if Some(project.id.as_str()) == selected { "*" } else { "" };
            table.add_row(row![marker, project.id, project.name]);
        }
        table.printstd();
    }

    pub fn ticktick_tasks(tasks: &[TickTickTask]) {
        let mut table = Table::new();

        table.add_row(row!["TITLE", "DUE", "WHEN"]);
        for task in tasks {
            let bucket = task.ticktick_status.map(|bucket| bucket.as_str()).unwrap_or(PLACEHOLDER);
            table.add_row(row![task.title, format_due_date(task.due_date.as_deref()), bucket]);
        }
        table.printstd();
    }
}
