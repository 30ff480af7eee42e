//! Local key-value persistence.
//!
//! The engine never talks to a concrete store; it goes through
//! [`KeyValueStore`], which mirrors the get/set/remove surface of browser
//! local storage. Two implementations ship with the crate:
//!
//! - [`crate::db::Database`]: SQLite-backed, used by the planner and CLI
//! - [`MemoryStore`]: in-process map with an optional byte quota, used by
//!   tests to simulate full storage

mod memory;

pub use memory::MemoryStore;

use crate::error::Result;

/// String-keyed storage of JSON documents.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value. A failed
    /// write must leave the previous value in place.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`, returning whether it existed.
    fn remove(&mut self, key: &str) -> Result<bool>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        (**self).remove(key)
    }
}
