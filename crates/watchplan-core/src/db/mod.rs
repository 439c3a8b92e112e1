//! SQLite-backed key-value storage for plans.
//!
//! Storage is a handful of keys, each holding one JSON document
//! (`plansData` and the legacy `planData`). This module owns the
//! connection and schema; [`kv_queries`] provides raw get/set/clear and
//! [`plan_queries`] the typed, transactional plan operations.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{Result, StorageResultExt};

pub mod kv_queries;
pub mod migrations;
pub mod plan_queries;

pub use plan_queries::{LEGACY_KEY, PLANS_KEY};

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).storage_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
