//! Storage configuration - where the three collections live on disk.

use serde::Deserialize;
use std::path::PathBuf;

/// Location of the persisted collections
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the collection files
    pub data_dir: PathBuf,
    /// File name of the menu collection
    pub menu_file: String,
    /// File name of the transactions collection
    pub transactions_file: String,
    /// File name of the admins collection
    pub admins_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            menu_file: "menu.json".to_string(),
            transactions_file: "transactions.json".to_string(),
            admins_file: "admins.json".to_string(),
        }
    }
}

impl StorageConfig {
    /// Configuration rooted at `data_dir` with the default file names
    #[must_use]
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the menu collection
    #[must_use]
    pub fn menu_path(&self) -> PathBuf {
        self.data_dir.join(&self.menu_file)
    }

    /// Full path of the transactions collection
    #[must_use]
    pub fn transactions_path(&self) -> PathBuf {
        self.data_dir.join(&self.transactions_file)
    }

    /// Full path of the admins collection
    #[must_use]
    pub fn admins_path(&self) -> PathBuf {
        self.data_dir.join(&self.admins_file)
    }
}
