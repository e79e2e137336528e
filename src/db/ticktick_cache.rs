//! TickTick responses kept between runs.
//!
//! One row per TickTick project: the raw task payload as JSON and the UTC
//! time it was fetched. Freshness is decided by the client, the table only
//! stores.

use super::db::Db;
use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const SCHEMA_TICKTICK_CACHE: &str = "CREATE TABLE IF NOT EXISTS ticktick_cache (
    project_id TEXT NOT NULL PRIMARY KEY,
    fetched_at INTEGER NOT NULL,
    payload TEXT NOT NULL
);";
const SELECT_ENTRY: &str = "SELECT fetched_at, payload FROM ticktick_cache WHERE project_id = ?";
const UPSERT_ENTRY: &str = "INSERT INTO ticktick_cache (project_id, fetched_at, payload) VALUES (?1, ?2, ?3)
    ON CONFLICT(project_id) DO UPDATE SET fetched_at = excluded.fetched_at, payload = excluded.payload";
const DELETE_ALL: &str = "DELETE FROM ticktick_cache";

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub fetched_at: DateTime<Utc>,
    pub payload: String,
}

pub struct TickTickCache {
    pub conn: Connection,
}

impl TickTickCache {
    pub fn new() -> Result<TickTickCache> {
        Self::init(Db::new()?)
    }

    pub fn open(path: &Path) -> Result<TickTickCache> {
        Self::init(Db::open(path)?)
    }

    fn init(db: Db) -> Result<TickTickCache> {
        db.conn.execute(SCHEMA_TICKTICK_CACHE, [])?;
        Ok(TickTickCache { conn: db.conn })
    }

    pub fn get(&self, project_id: &str) -> Result<Option<CacheEntry>> {
        let row = self
            .conn
            .query_row(SELECT_ENTRY, params![project_id], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
            })
            .optional()?;

        // Rows with an unreadable timestamp are treated as missing.
        Ok(row.and_then(|(millis, payload)| {
            DateTime::from_timestamp_millis(millis).map(|fetched_at| CacheEntry { fetched_at, payload })
        }))
    }

    pub fn put(&self, project_id: &str, entry: &CacheEntry) -> Result<()> {
        self.conn.execute(
            UPSERT_ENTRY,
            params![project_id, entry.fetched_at.timestamp_millis(), entry.payload],
        )?;
        Ok(())
    }

    /// Returns the number of entries removed.
    pub fn clear(&self) -> Result<usize> {
        Ok(self.conn.execute(DELETE_ALL, [])?)
    }
}
