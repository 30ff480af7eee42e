//! In-memory key-value store.

use std::collections::HashMap;

use super::KeyValueStore;
use crate::error::{ItineraryError, Result};

/// HashMap-backed store with an optional quota on the total stored bytes.
///
/// The quota counts key and value lengths, the way browser storage limits
/// are usually reported.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects writes pushing usage above `limit` bytes.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(limit),
        }
    }

    /// Changes the quota; `None` lifts it.
    pub fn set_quota(&mut self, limit: Option<usize>) {
        self.quota = limit;
    }

    /// Bytes currently in use.
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    /// Raw access for tests that plant malformed data.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(limit) = self.quota {
            let current = self
                .entries
                .get(key)
                .map_or(0, |old| key.len() + old.len());
            let needed = self.used_bytes() - current + key.len() + value.len();
            if needed > limit {
                return Err(ItineraryError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }
}
