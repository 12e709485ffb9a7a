//! The database facade (specification §4.2): a narrow typed wrapper around
//! `roster_store::Table<Record>` that keeps the query engine from depending
//! on store internals.

use roster_errors::StoreError;
use roster_model::{Predicate, Record};
use roster_store::{Config, Table};

/// Growth threshold a freshly created [`Database`] starts with.
pub const DEFAULT_MAX_SIZE: usize = 64;

/// Holds the sole store handle for the process.
pub struct Database {
    table: Table<Record>,
    max_size: usize,
}

impl Database {
    /// Creates a fresh, empty database.
    pub fn create() -> Result<Self, StoreError> {
        Self::create_with_max_size(DEFAULT_MAX_SIZE)
    }

    pub fn create_with_max_size(max_size: usize) -> Result<Self, StoreError> {
        Ok(Database {
            table: Table::create(Config { max_size })?,
            max_size,
        })
    }

    /// Drops every stored record and rebuilds an empty table at the
    /// original `max_size`, exactly as DEL-all is specified: "Delete
    /// followed by Create" (specification §3, §4.3).
    pub fn delete_all(&mut self) -> Result<(), StoreError> {
        self.table = Table::create(Config { max_size: self.max_size })?;
        Ok(())
    }

    pub fn add(&mut self, record: Record) -> Result<(), StoreError> {
        let id = record.id;
        self.table.add(id, record)
    }

    pub fn remove(&mut self, id: u64) -> Result<(), StoreError> {
        self.table.remove(id)
    }

    pub fn modify(&mut self, patch: &Record) -> Result<(), StoreError> {
        self.table.modify(patch.id, patch)
    }

    pub fn get_by_id(&self, id: u64) -> Option<&Record> {
        self.table.get_by_key(id)
    }

    pub fn get_by_predicate(&self, predicate: &Predicate) -> Vec<&Record> {
        if *predicate == Predicate::all() {
            self.table.get_by_predicate(None)
        } else {
            self.table.get_by_predicate(Some(predicate))
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: u64) -> Record {
        Record::new(id)
    }

    #[test]
    fn add_get_remove_round_trip() {
        let mut db = Database::create().unwrap();
        db.add(rec(1)).unwrap();
        assert!(db.get_by_id(1).is_some());
        db.remove(1).unwrap();
        assert!(db.get_by_id(1).is_none());
    }

    #[test]
    fn delete_all_empties_the_database() {
        let mut db = Database::create().unwrap();
        for id in 1..=5 {
            db.add(rec(id)).unwrap();
        }
        db.delete_all().unwrap();
        assert_eq!(db.len(), 0);
        assert!(db.get_by_id(1).is_none());
    }

    #[test]
    fn scan_with_all_predicate_returns_everything() {
        let mut db = Database::create().unwrap();
        for id in 1..=3 {
            db.add(rec(id)).unwrap();
        }
        assert_eq!(db.get_by_predicate(&Predicate::all()).len(), 3);
    }
}
