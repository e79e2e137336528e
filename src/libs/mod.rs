//! Core library modules of pmdash.
//!
//! ## Features
//!
//! - **Engine**: task join, filters, sorting, aggregation, to-dos and milestones
//! - **View state**: sort and filter state of the task tables and their preference keys
//! - **Infrastructure**: configuration, data directory, messaging
//! - **Presentation**: es-ES formatting, terminal tables, export
//!
//! ## Usage
//!
//! ```rust
//! use pmdash::libs::filter::{apply_filters, FilterSpec};
//! use pmdash::libs::sort::{sort_tasks, SortState};
//! use pmdash::libs::stats::get_dashboard_stats;
//!
//! let visible = sort_tasks(&apply_filters(&[], &FilterSpec::default()), SortState::default());
//! let stats = get_dashboard_stats(&visible, 50.0);
//! assert_eq!(stats.total_hours, 0.0);
//! ```

pub mod config;
pub mod dashboard;
pub mod data_storage;
pub mod date;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod messages;
pub mod milestone;
pub mod sort;
pub mod stats;
pub mod task;
pub mod todo;
pub mod view;
