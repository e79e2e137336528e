//! Data access: JSON fixtures plus the SQLite preferences and TickTick cache
//! tables.
//!
//! ```rust,no_run
//! use pmdash::db::{fixtures::Fixtures, preferences::Preferences};
//! use pmdash::libs::task::LegacyProjectFallback;
//! use std::path::Path;
//!
//! let fixtures = Fixtures::load(Path::new("data"))?;
//! let tasks = fixtures.tasks(&LegacyProjectFallback::default());
//! let prefs = Preferences::new()?;
//! prefs.save_value("pm-ticktick-project", "abc");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod db;

pub mod fixtures;

pub mod preferences;

pub mod ticktick_cache;
