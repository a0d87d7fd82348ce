//! Transaction entity - One confirmed order line in the ledger.
//!
//! Every line of a confirmed order becomes one record; all records of the same
//! order share the confirmation timestamp. Records are immutable once written.
//! `timestamp` is optional because early data files carried records without one.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format used for stored timestamps ("YYYY-MM-DD HH:MM:SS")
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Transaction record as stored in the transactions collection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Id of the ordered menu item
    pub item_id: u32,
    /// Number of units ordered
    pub quantity: u32,
    /// Quantity times unit price at order time
    #[serde(rename = "total_price")]
    pub line_total: f64,
    /// Item name as it was when the order was placed
    #[serde(rename = "name")]
    pub item_name: String,
    /// When the order was confirmed
    #[serde(default, with = "timestamp_format")]
    pub timestamp: Option<NaiveDateTime>,
}

impl TransactionRecord {
    /// Timestamp formatted for display, or "N/A" for legacy records
    #[must_use]
    pub fn display_timestamp(&self) -> String {
        self.timestamp.map_or_else(
            || "N/A".to_string(),
            |ts| ts.format(TIMESTAMP_FORMAT).to_string(),
        )
    }
}

mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|s| NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(D::Error::custom))
            .transpose()
    }
}
