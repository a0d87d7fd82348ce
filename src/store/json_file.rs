//! JSON file store.
//!
//! Each collection is one pretty-printed JSON array. Writes go to a `.tmp`
//! sibling first and are then renamed over the target, so a crash never leaves
//! a truncated collection behind.

use super::{Collection, Store};
use crate::{config::StorageConfig, errors::Result};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Store backed by one JSON file per collection
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    config: StorageConfig,
}

impl JsonFileStore {
    /// Creates a store using the paths in `config`
    #[must_use]
    pub const fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Path of the file backing `collection`
    #[must_use]
    pub fn path_for(&self, collection: Collection) -> PathBuf {
        match collection {
            Collection::Menu => self.config.menu_path(),
            Collection::Transactions => self.config.transactions_path(),
            Collection::Admins => self.config.admins_path(),
        }
    }
}

impl Store for JsonFileStore {
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let path = self.path_for(collection);
        if !path.exists() {
            tracing::debug!("No {} file at {}, starting empty", collection, path.display());
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)?;
        let records: Vec<T> = serde_json::from_str(&contents)
            .inspect_err(|e| tracing::error!("Failed to decode {}: {}", path.display(), e))?;
        tracing::debug!("Loaded {} {} records", records.len(), collection);
        Ok(records)
    }

    fn save<T: Serialize>(&mut self, collection: Collection, records: &[T]) -> Result<()> {
        let path = self.path_for(collection);
        let json = serde_json::to_string_pretty(records)?;
        atomic_write(&path, json.as_bytes())?;
        tracing::debug!("Saved {} {} records to {}", records.len(), collection, path.display());
        Ok(())
    }
}

/// Writes `content` to `target_path` through a temp file and rename.
///
/// The temp file is removed again if the rename fails.
///
/// # Errors
/// Returns an error if the parent directory cannot be created or the write or
/// rename fails.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)?;
    }

    let temp_path = target_path.with_extension("tmp");
    fs::write(&temp_path, content)?;
    if let Err(e) = fs::rename(&temp_path, target_path) {
        if let Err(cleanup) = fs::remove_file(&temp_path) {
            tracing::warn!("Could not remove {}: {}", temp_path.display(), cleanup);
        }
        return Err(e.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::{AdminCredential, MenuItem};
    use crate::errors::Error;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(StorageConfig::in_dir(dir.path().join("data")))
    }

    #[test]
    fn test_missing_collection_loads_empty() -> Result<()> {
        let dir = TempDir::new()?;
        let store = store_in(&dir);

        let items: Vec<MenuItem> = store.load(Collection::Menu)?;
        assert!(items.is_empty());
        Ok(())
    }

    #[test]
    fn test_save_creates_directory_and_overwrites() -> Result<()> {
        let dir = TempDir::new()?;
        let mut store = store_in(&dir);

        let admins = vec![
            AdminCredential::new("alice", "s3cret"),
            AdminCredential::new("bob", "hunter2"),
        ];
        store.save(Collection::Admins, &admins)?;
        store.save(Collection::Admins, &admins[..1])?;

        let loaded: Vec<AdminCredential> = store.load(Collection::Admins)?;
        assert_eq!(loaded, vec![AdminCredential::new("alice", "s3cret")]);
        Ok(())
    }

    #[test]
    fn test_no_tmp_files_after_save() -> Result<()> {
        let dir = TempDir::new()?;
        let mut store = store_in(&dir);
        store.save(Collection::Admins, &[AdminCredential::new("a", "b")])?;

        let tmp_count = fs::read_dir(dir.path().join("data"))?
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(tmp_count, 0);
        Ok(())
    }

    #[test]
    fn test_failed_rename_removes_tmp_file() -> Result<()> {
        let dir = TempDir::new()?;
        // A non-empty directory at the target path makes the rename fail
        let target = dir.path().join("menu.json");
        fs::create_dir_all(target.join("occupied"))?;

        let result = atomic_write(&target, b"[]");

        assert!(matches!(result, Err(Error::Io(_))));
        assert!(!target.with_extension("tmp").exists());
        assert!(target.is_dir());
        Ok(())
    }

    #[test]
    fn test_reads_hand_written_menu_file() -> Result<()> {
        let dir = TempDir::new()?;
        let store = store_in(&dir);
        let path = store.path_for(Collection::Menu);
        fs::create_dir_all(path.parent().unwrap())?;
        fs::write(
            &path,
            r#"[{"id": 1, "name": "Veg Biryani", "price": 9.99, "veg": true, "reviews": [4]}]"#,
        )?;

        let items: Vec<MenuItem> = store.load(Collection::Menu)?;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Veg Biryani");
        Ok(())
    }

    #[test]
    fn test_corrupt_file_is_json_error() -> Result<()> {
        let dir = TempDir::new()?;
        let store = store_in(&dir);
        let path = store.path_for(Collection::Menu);
        fs::create_dir_all(path.parent().unwrap())?;
        fs::write(&path, "[{\"id\": 1,")?;

        let result: Result<Vec<MenuItem>> = store.load(Collection::Menu);
        assert!(matches!(result, Err(Error::Json(_))));
        Ok(())
    }
}
