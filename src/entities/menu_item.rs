//! Menu item entity - Represents one orderable dish in the catalog.
//!
//! Each item has an id, name, unit price, vegetarian flag and the list of
//! customer ratings it has received. Items are never deleted; the id is
//! assigned once when the item is added and never reused.

use serde::{Deserialize, Serialize};

/// Menu item record as stored in the menu collection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier, assigned as catalog size + 1
    pub id: u32,
    /// Display name (e.g., "Paneer Tikka", "Masala Tea")
    pub name: String,
    /// Unit price in dollars
    pub price: f64,
    /// Whether the dish is vegetarian
    #[serde(rename = "veg")]
    pub is_vegetarian: bool,
    /// Customer ratings (1-5) in the order they were submitted
    #[serde(default)]
    pub reviews: Vec<u8>,
}

impl MenuItem {
    /// Arithmetic mean of all ratings, or 0 when the item has none.
    #[must_use]
    pub fn average_rating(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.reviews.iter().map(|&r| u32::from(r)).sum();
        #[allow(clippy::cast_precision_loss)]
        let count = self.reviews.len() as f64;
        f64::from(sum) / count
    }

    /// "Veg" or "Non-Veg" label used in the menu table
    #[must_use]
    pub const fn diet_label(&self) -> &'static str {
        if self.is_vegetarian { "Veg" } else { "Non-Veg" }
    }
}
