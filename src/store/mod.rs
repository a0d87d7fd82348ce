//! Persistence collaborator - loads and overwrites named collections.
//!
//! A collection is always read and written as a whole. Loading a collection
//! that has never been written yields an empty list.

/// JSON files on disk
pub mod json_file;
/// In-process store for tests
#[cfg(test)]
pub mod memory;

pub use json_file::JsonFileStore;
#[cfg(test)]
pub use memory::MemoryStore;

use crate::errors::Result;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt;

/// The three persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Menu items
    Menu,
    /// Confirmed order lines
    Transactions,
    /// Admin credentials
    Admins,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Menu => "menu",
            Self::Transactions => "transactions",
            Self::Admins => "admins",
        };
        f.write_str(name)
    }
}

/// Whole-collection storage
pub trait Store {
    /// Reads every record of `collection`; an absent collection is empty.
    ///
    /// # Errors
    /// Returns an error if the collection exists but cannot be read or decoded.
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>>;

    /// Replaces the whole of `collection` with `records`.
    ///
    /// # Errors
    /// Returns an error if the records cannot be encoded or written.
    fn save<T: Serialize>(&mut self, collection: Collection, records: &[T]) -> Result<()>;
}
