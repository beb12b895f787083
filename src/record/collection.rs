//! Collection - insertion-ordered, id-keyed record storage.

use indexmap::IndexMap;

use super::Record;

/// Owned collection of records keyed by id.
///
/// Iteration follows insertion order. Replacing a record keeps its position;
/// removing one keeps the relative order of the rest.
#[derive(Debug, Clone)]
pub struct Collection<R> {
    records: IndexMap<u64, R>,
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> Collection<R> {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.records.contains_key(&id)
    }

    /// Get a record by id.
    pub fn get(&self, id: u64) -> Option<&R> {
        self.records.get(&id)
    }

    /// Append a new record. Hands the record back if its id is taken.
    pub fn try_insert(&mut self, record: R) -> Result<&R, R> {
        let id = record.id();
        if self.records.contains_key(&id) {
            return Err(record);
        }
        let (index, _) = self.records.insert_full(id, record);
        Ok(&self.records[index])
    }

    /// Replace the record with the same id in place, returning the old one.
    /// Hands the record back if no record has its id.
    pub fn replace(&mut self, record: R) -> Result<R, R> {
        match self.records.get_mut(&record.id()) {
            Some(slot) => Ok(std::mem::replace(slot, record)),
            None => Err(record),
        }
    }

    /// Remove a record by id. Returns the removed record if it existed.
    pub fn remove(&mut self, id: u64) -> Option<R> {
        self.records.shift_remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    /// Records matching a predicate, in collection order.
    pub fn find<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a R>
    where
        P: Fn(&R) -> bool,
    {
        self.records.values().filter(move |record| predicate(*record))
    }
}
