//! SQLite-backed key-value storage.
//!
//! This module provides the production [`KeyValueStore`] used by the
//! planner and the CLI. A single table holds every key; values are the JSON
//! documents described in [`crate::models`].

use std::path::Path;

use rusqlite::Connection;

use crate::{
    error::{Result, StorageResultExt},
    storage::KeyValueStore,
};

pub mod kv_queries;
pub mod migrations;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).storage_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory()
            .storage_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_value(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.put_value(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        self.delete_value(key)
    }
}
