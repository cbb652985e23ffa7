//! Generic keyed collection backing every entity kind.
//!
//! One `Collection<T>` replaces the six near-identical map
//! implementations a per-entity store would need: the id/timestamp
//! generation and lookup contract is uniform, and each entity kind only
//! supplies a record type plus its kind-specific query helpers on top.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory keyed collection with insertion-order iteration.
///
/// Records are create-only: once inserted they are never updated or
/// removed, so every mutation is a single-step append with no partial
/// write window.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: HashMap<Uuid, T>,
    order: Vec<Uuid>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a fresh id and creation timestamp, hands both to the
    /// builder, and stores the resulting record. Returns the record as
    /// stored. This is the only way records enter a collection, which is
    /// what guarantees ids are assigned exactly once and never reused.
    pub fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(Uuid, DateTime<Utc>) -> T,
    {
        let id = Uuid::new_v4();
        let record = build(id, Utc::now());
        self.records.insert(id, record.clone());
        self.order.push(id);
        record
    }

    /// Looks up a record by id. An unknown id is an absent result, never
    /// an error.
    pub fn get(&self, id: Uuid) -> Option<T> {
        self.records.get(&id).cloned()
    }

    /// All records in insertion order.
    pub fn all(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_assigns_distinct_ids_and_preserves_order() {
        let mut collection: Collection<(Uuid, &str)> = Collection::new();
        let a = collection.insert_with(|id, _| (id, "a"));
        let b = collection.insert_with(|id, _| (id, "b"));
        let c = collection.insert_with(|id, _| (id, "c"));

        assert_ne!(a.0, b.0);
        assert_ne!(b.0, c.0);
        assert_eq!(collection.len(), 3);

        let names: Vec<&str> = collection.all().into_iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn get_unknown_id_is_none() {
        let collection: Collection<(Uuid, &str)> = Collection::new();
        assert!(collection.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn get_returns_stored_record() {
        let mut collection: Collection<(Uuid, &str)> = Collection::new();
        let stored = collection.insert_with(|id, _| (id, "record"));
        assert_eq!(collection.get(stored.0), Some(stored));
    }
}
