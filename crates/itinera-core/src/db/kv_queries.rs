//! Key-value reads and writes.

use jiff::Timestamp;
use rusqlite::{OptionalExtension, params};

use crate::error::{Result, StorageResultExt};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv_store WHERE key = ?1";
const SELECT_KEYS_SQL: &str = "SELECT key FROM kv_store ORDER BY key";

impl super::Database {
    /// Reads the value stored under `key`.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .storage_context("Failed to read value")
    }

    /// Writes `value` under `key` in its own transaction.
    pub fn put_value(&mut self, key: &str, value: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .storage_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();
        tx.execute(UPSERT_VALUE_SQL, params![key, value, &now_str])
            .storage_context("Failed to write value")?;

        tx.commit().storage_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Removes `key`, returning whether a row was deleted.
    pub fn delete_value(&mut self, key: &str) -> Result<bool> {
        let removed = self
            .connection
            .execute(DELETE_VALUE_SQL, params![key])
            .storage_context("Failed to delete value")?;

        Ok(removed > 0)
    }

    /// Lists every stored key in lexical order.
    pub fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_KEYS_SQL)
            .storage_context("Failed to prepare query")?;

        let keys = stmt
            .query_map([], |row| row.get(0))
            .storage_context("Failed to query keys")?
            .collect::<std::result::Result<Vec<String>, _>>()
            .storage_context("Failed to fetch keys")?;

        Ok(keys)
    }
}
