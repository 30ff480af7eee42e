//! Schema setup for new and existing database files.

use crate::error::{Result, StorageResultExt};

impl super::Database {
    /// Creates the `kv_store` table when it does not exist yet.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute_batch(include_str!("../../assets/schema.sql"))
            .storage_context("Failed to initialize database schema")
    }
}
