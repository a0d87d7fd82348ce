//! Entity module - Record types for the three persisted collections.
//! Field names on disk follow the existing data files, so some fields are renamed
//! through serde attributes.

pub mod admin;
pub mod menu_item;
pub mod transaction;

pub use admin::AdminCredential;
pub use menu_item::MenuItem;
pub use transaction::{TIMESTAMP_FORMAT, TransactionRecord};
