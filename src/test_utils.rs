//! Shared test utilities for the restaurant manager.
//!
//! This module provides common helpers for building a seeded in-memory service,
//! sample menu data and a console fed from a fixed script.

use crate::{
    cli::StdConsole,
    core::ManagementService,
    entities::{AdminCredential, MenuItem, TransactionRecord},
    errors::Result,
    store::{Collection, MemoryStore, Store},
};
use chrono::{NaiveDate, NaiveDateTime};
use std::io::Cursor;

/// Username of the seeded admin
pub const TEST_ADMIN_USER: &str = "manager";
/// Password of the seeded admin
pub const TEST_ADMIN_PASSWORD: &str = "curry42";

/// Three menu items:
/// * 1 `Masala Tea`, 2.50, veg, reviews [5, 4]
/// * 2 `Paneer Tikka`, 8.00, veg, no reviews
/// * 3 `Chicken Biryani`, 11.50, non-veg, reviews [4]
pub fn sample_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: 1,
            name: "Masala Tea".to_string(),
            price: 2.50,
            is_vegetarian: true,
            reviews: vec![5, 4],
        },
        MenuItem {
            id: 2,
            name: "Paneer Tikka".to_string(),
            price: 8.00,
            is_vegetarian: true,
            reviews: Vec::new(),
        },
        MenuItem {
            id: 3,
            name: "Chicken Biryani".to_string(),
            price: 11.50,
            is_vegetarian: false,
            reviews: vec![4],
        },
    ]
}

/// A memory store holding the sample menu and one admin, with no transactions.
pub fn seeded_store() -> Result<MemoryStore> {
    let mut store = MemoryStore::new();
    store.save(Collection::Menu, &sample_items())?;
    store.save(
        Collection::Admins,
        &[AdminCredential::new(TEST_ADMIN_USER, TEST_ADMIN_PASSWORD)],
    )?;
    Ok(store)
}

/// Service loaded from [`seeded_store`].
/// This is the standard setup for service and console tests.
pub fn setup_test_service() -> Result<ManagementService<MemoryStore>> {
    ManagementService::load(seeded_store()?)
}

/// Fixed confirmation time: 2024-05-17 19:30:00
pub fn test_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 17)
        .and_then(|d| d.and_hms_opt(19, 30, 0))
        .unwrap_or_default()
}

/// Ledger record stamped with [`test_timestamp`]; the name is a placeholder
/// because rendering resolves names through the catalog.
pub fn test_record(item_id: u32, quantity: u32, line_total: f64) -> TransactionRecord {
    TransactionRecord {
        item_id,
        quantity,
        line_total,
        item_name: format!("item {item_id}"),
        timestamp: Some(test_timestamp()),
    }
}

/// Console that reads `lines` in order and captures everything written.
pub fn scripted_console(lines: &[&str]) -> StdConsole<Cursor<Vec<u8>>, Vec<u8>> {
    let mut script = lines.join("\n");
    script.push('\n');
    StdConsole::new(Cursor::new(script.into_bytes()), Vec::new())
}

/// Everything written to a scripted console so far
pub fn console_output(console: &StdConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8_lossy(console.output()).into_owned()
}
