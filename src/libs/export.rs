//! Export of task views to CSV, JSON or Excel.
//!
//! The exported rows are exactly what the task table shows after filtering
//! and sorting, with hours and cost computed from the logged entries.
//!
//! ```rust,no_run
//! use pmdash::libs::export::{ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export_tasks(&[], 50.0)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::{messages::Message, task::Task};
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// One exported task row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportTask {
    pub id: u64,
    pub title: String,
    pub project: String,
    pub phase: String,
    pub status: String,
    pub owner: String,
    pub start_date: String,
    pub end_date: String,
    pub hours: f64,
    pub cost: f64,
    pub notes: String,
}

impl ExportTask {
    pub fn from_task(task: &Task, hourly_rate: f64) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let hours = task.hours();
        Self {
            id: task.id,
            title: task.title.clone(),
            project: text(&task.project),
            phase: text(&task.phase),
            status: text(&task.status),
            owner: text(&task.owner),
            start_date: text(&task.start_date),
            end_date: text(&task.end_date),
            hours,
            cost: hours * hourly_rate,
            notes: task.notes.clone(),
        }
    }
}

const HEADERS: [&str; 11] = [
    "ID", "Title", "Project", "Phase", "Status", "Owner", "Start", "End", "Hours", "Cost", "Notes",
];

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named `pmdash_tasks_<timestamp>.<ext>`
    /// in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "pmdash_tasks_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export_tasks(&self, tasks: &[Task], hourly_rate: f64) -> Result<()> {
        let rows: Vec<ExportTask> = tasks.iter().map(|task| ExportTask::from_task(task, hourly_rate)).collect();

        match self.format {
            ExportFormat::Csv => self.write_csv(&rows)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(&rows)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
            ExportFormat::Excel => self.write_excel(&rows)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_csv(&self, rows: &[ExportTask]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(HEADERS)?;

        for row in rows {
            wtr.write_record(&[
                row.id.to_string(),
                row.title.clone(),
                row.project.clone(),
                row.phase.clone(),
                row.status.clone(),
                row.owner.clone(),
                row.start_date.clone(),
                row.end_date.clone(),
                row.hours.to_string(),
                row.cost.to_string(),
                row.notes.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_excel(&self, rows: &[ExportTask]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            worksheet.write_number(r, 0, row.id as f64)?;
            worksheet.write_string(r, 1, &row.title)?;
            worksheet.write_string(r, 2, &row.project)?;
            worksheet.write_string(r, 3, &row.phase)?;
            worksheet.write_string(r, 4, &row.status)?;
            worksheet.write_string(r, 5, &row.owner)?;
            worksheet.write_string(r, 6, &row.start_date)?;
            worksheet.write_string(r, 7, &row.end_date)?;
            worksheet.write_number(r, 8, row.hours)?;
            worksheet.write_number(r, 9, row.cost)?;
            worksheet.write_string(r, 10, &row.notes)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
