//! # pmdash - Project Management Dashboard
//!
//! Task, hour, to-do and milestone views over a directory of JSON fixtures,
//! with an optional TickTick panel.
//!
//! ## Features
//!
//! - **Task engine**: Filtering, stable sorting and hour aggregation
//! - **Dashboard**: Stat cards, hours per project and phase, recent tasks
//! - **Project pages**: Per-project filters, to-dos and milestones
//! - **TickTick**: Open tasks of a linked project, bucketed by due date
//! - **Data Export**: Export task views to CSV, JSON, and Excel formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pmdash::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
