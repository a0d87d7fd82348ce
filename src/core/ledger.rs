//! Transaction ledger - the append-only history of confirmed orders.
//!
//! Rendering resolves item names through the current catalog. A record whose
//! item no longer resolves is left out of the table and the grand total.

use crate::{
    core::{menu::MenuCatalog, report},
    entities::{MenuItem, TransactionRecord},
    errors::{Error, Result},
};

/// A ledger row paired with the catalog item it refers to
#[derive(Debug, Clone, Copy)]
pub struct ResolvedRecord<'a> {
    /// 1-based position in the ledger
    pub serial: usize,
    /// The stored record
    pub record: &'a TransactionRecord,
    /// The catalog item the record points at
    pub item: &'a MenuItem,
}

/// Confirmed order lines in confirmation order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionLedger {
    records: Vec<TransactionRecord>,
}

impl TransactionLedger {
    /// Creates an empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps stored records.
    ///
    /// # Errors
    /// Returns [`Error::InvalidQuantity`] if a record has quantity 0.
    pub fn from_records(records: Vec<TransactionRecord>) -> Result<Self> {
        if let Some(bad) = records.iter().find(|record| record.quantity == 0) {
            return Err(Error::InvalidQuantity {
                quantity: bad.quantity,
            });
        }
        Ok(Self { records })
    }

    /// Every record, oldest first
    #[must_use]
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends records in order, returning how many were added.
    pub fn append(&mut self, records: Vec<TransactionRecord>) -> usize {
        let count = records.len();
        self.records.extend(records);
        count
    }

    /// Records whose item still resolves in `catalog`, with their ledger position
    pub fn resolved<'a>(
        &'a self,
        catalog: &'a MenuCatalog,
    ) -> impl Iterator<Item = ResolvedRecord<'a>> + 'a {
        self.records
            .iter()
            .enumerate()
            .filter_map(move |(idx, record)| {
                catalog.find_by_id(record.item_id).map(|item| ResolvedRecord {
                    serial: idx + 1,
                    record,
                    item,
                })
            })
    }

    /// Sum of line totals over every resolvable record
    #[must_use]
    pub fn grand_total(&self, catalog: &MenuCatalog) -> f64 {
        self.resolved(catalog).map(|row| row.record.line_total).sum()
    }

    /// History table followed by the grand total
    #[must_use]
    pub fn render(&self, catalog: &MenuCatalog) -> String {
        let rows: Vec<ResolvedRecord<'_>> = self.resolved(catalog).collect();
        report::format_history_table(&rows, self.grand_total(catalog))
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.records.truncate(len);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_append_keeps_order() {
        let mut ledger = TransactionLedger::new();
        assert!(ledger.is_empty());

        let added = ledger.append(vec![test_record(1, 2, 5.0), test_record(3, 1, 11.5)]);
        assert_eq!(added, 2);
        ledger.append(vec![test_record(2, 1, 8.0)]);

        let ids: Vec<u32> = ledger.records().iter().map(|r| r.item_id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn test_grand_total_skips_unresolved_items() -> Result<()> {
        let catalog = crate::core::MenuCatalog::from_items(sample_items())?;
        let ledger = TransactionLedger::from_records(vec![
            test_record(1, 2, 5.0),
            test_record(42, 1, 100.0),
            test_record(3, 1, 11.5),
        ])?;

        assert_eq!(ledger.grand_total(&catalog), 16.5);
        let serials: Vec<usize> = ledger.resolved(&catalog).map(|row| row.serial).collect();
        assert_eq!(serials, vec![1, 3]);
        Ok(())
    }

    #[test]
    fn test_render_uses_current_catalog_names() -> Result<()> {
        let mut items = sample_items();
        items[0].name = "Cutting Chai".to_string();
        let catalog = crate::core::MenuCatalog::from_items(items)?;
        let ledger = TransactionLedger::from_records(vec![test_record(1, 2, 5.0)])?;

        let table = ledger.render(&catalog);
        assert!(table.contains("Cutting Chai"));
        assert!(!table.contains("Masala Tea"));
        assert!(table.contains("Total Price:"));
        assert!(table.contains("5.00"));
        Ok(())
    }

    #[test]
    fn test_from_records_rejects_zero_quantity() {
        let result =
            TransactionLedger::from_records(vec![test_record(1, 2, 5.0), test_record(2, 0, 0.0)]);
        assert!(matches!(result, Err(Error::InvalidQuantity { quantity: 0 })));
    }

    #[test]
    fn test_empty_ledger_renders_zero_total() {
        let table = TransactionLedger::new().render(&crate::core::MenuCatalog::new());
        assert!(table.contains("0.00"));
    }
}
