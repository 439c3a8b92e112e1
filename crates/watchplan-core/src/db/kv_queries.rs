//! Raw key-value operations over the `storage` table.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Result, StorageResultExt};

const SELECT_VALUE_SQL: &str = "SELECT value FROM storage WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_ALL_SQL: &str = "DELETE FROM storage";

/// Reads the raw JSON stored under `key`.
pub(crate) fn read_value(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
        .optional()
        .storage_context("Failed to read storage key")
}

/// Writes raw JSON under `key`, replacing any previous value.
pub(crate) fn write_value(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        UPSERT_VALUE_SQL,
        params![key, value, Timestamp::now().to_string()],
    )
    .storage_context("Failed to write storage key")?;
    Ok(())
}

/// Reads and deserializes the document under `key`.
pub(crate) fn read_json<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Option<T>> {
    match read_value(conn, key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serializes `value` and stores it under `key`.
pub(crate) fn write_json<T: Serialize>(conn: &Connection, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    write_value(conn, key, &raw)
}

impl super::Database {
    /// Returns the raw JSON stored under `key`, if any.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        debug!("Reading storage key {key}");
        read_value(&self.connection, key)
    }

    /// Stores raw JSON under `key`.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!("Writing storage key {key}");
        write_value(&self.connection, key, value)
    }

    /// Removes every key.
    pub fn clear(&self) -> Result<()> {
        let removed = self
            .connection
            .execute(DELETE_ALL_SQL, [])
            .storage_context("Failed to clear storage")?;
        debug!("Cleared {removed} storage keys");
        Ok(())
    }
}
