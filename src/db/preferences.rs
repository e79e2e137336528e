//! Persisted view state (saved filters, chosen TickTick project, "show
//! completed" toggles) as a key/value table.
//!
//! Values are stored as text, usually JSON. The `load_*` and `save_*` helpers
//! never fail: a value that cannot be read or parsed behaves as if nothing
//! was saved, and write failures are only logged.

use super::db::Db;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

const SCHEMA_PREFERENCES: &str = "CREATE TABLE IF NOT EXISTS preferences (
    key TEXT NOT NULL PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);";
const SELECT_VALUE: &str = "SELECT value FROM preferences WHERE key = ?";
const UPSERT_VALUE: &str = "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, datetime(CURRENT_TIMESTAMP, 'localtime'))
    ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE: &str = "DELETE FROM preferences WHERE key = ?";

pub struct Preferences {
    pub conn: Connection,
}

impl Preferences {
    pub fn new() -> Result<Preferences> {
        Self::init(Db::new()?)
    }

    pub fn open(path: &Path) -> Result<Preferences> {
        Self::init(Db::open(path)?)
    }

    fn init(db: Db) -> Result<Preferences> {
        db.conn.execute(SCHEMA_PREFERENCES, [])?;
        Ok(Preferences { conn: db.conn })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(SELECT_VALUE, params![key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(UPSERT_VALUE, params![key, value])?;
        Ok(())
    }

    /// Returns whether a value was removed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let removed = self.conn.execute(DELETE_VALUE, params![key])?;
        Ok(removed > 0)
    }

    pub fn load_value(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(key, %error, "preference read failed");
                msg_debug!(Message::PreferenceReadFailed(key.to_string(), error.to_string()));
                None
            }
        }
    }

    pub fn save_value(&self, key: &str, value: &str) {
        if let Err(error) = self.set(key, value) {
            tracing::warn!(key, %error, "preference write failed");
            msg_debug!(Message::PreferenceWriteFailed(key.to_string(), error.to_string()));
        }
    }

    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.load_value(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(key, %error, "stored preference is not valid JSON");
                None
            }
        }
    }

    pub fn save_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.save_value(key, &raw),
            Err(error) => tracing::warn!(key, %error, "preference could not be serialized"),
        }
    }
}
