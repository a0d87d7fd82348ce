//! In-memory store.
//!
//! Keeps each collection as its serialized JSON so records go through the same
//! encode/decode path as the file store. Writes can be made to fail to exercise
//! rollback paths.

use super::{Collection, Store};
use crate::errors::Result;
use serde::{Serialize, de::DeserializeOwned};
use std::collections::HashMap;

/// Store that keeps collections in a map
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: HashMap<Collection, String>,
    fail_writes: bool,
    save_count: usize,
}

impl MemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `save` fail with an I/O error
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful saves so far
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.save_count
    }
}

impl Store for MemoryStore {
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        match self.collections.get(&collection) {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Ok(Vec::new()),
        }
    }

    fn save<T: Serialize>(&mut self, collection: Collection, records: &[T]) -> Result<()> {
        if self.fail_writes {
            return Err(std::io::Error::other(format!("write to {collection} refused")).into());
        }
        let json = serde_json::to_string(records)?;
        self.collections.insert(collection, json);
        self.save_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AdminCredential;
    use crate::errors::Error;

    #[test]
    fn test_round_trip_and_failure_mode() -> Result<()> {
        let mut store = MemoryStore::new();
        let empty: Vec<AdminCredential> = store.load(Collection::Admins)?;
        assert!(empty.is_empty());

        store.save(Collection::Admins, &[AdminCredential::new("root", "pw")])?;
        let loaded: Vec<AdminCredential> = store.load(Collection::Admins)?;
        assert_eq!(loaded.len(), 1);
        assert_eq!(store.save_count(), 1);

        store.set_fail_writes(true);
        let result = store.save(Collection::Admins, &loaded);
        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(store.save_count(), 1);
        Ok(())
    }
}
