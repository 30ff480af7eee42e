//! Identifier generation for trips and itinerary items.

use uuid::Uuid;

/// Source of globally unique string identifiers.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs, the production generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Predictable identifiers (`prefix-1`, `prefix-2`, ...) for tests and
/// fixtures.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_unique_and_non_empty() {
        let mut ids = UuidGenerator;
        let a = ids.next_id();
        let b = ids.next_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new("item");
        assert_eq!(ids.next_id(), "item-1");
        assert_eq!(ids.next_id(), "item-2");
    }
}
