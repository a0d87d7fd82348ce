//! Menu catalog business logic - lookup, pricing, new items and reviews.
//!
//! The catalog is a plain in-memory list; persisting it after a mutation is the
//! caller's job (see [`crate::core::service`]). Item ids are assigned as
//! catalog size + 1 and items are never removed.

use crate::{
    core::report,
    entities::MenuItem,
    errors::{Error, Result},
};
use std::collections::HashSet;

/// Lowest accepted rating
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating
pub const MAX_RATING: u8 = 5;

/// Checks that a price is finite and non-negative.
///
/// # Errors
/// Returns [`Error::InvalidPrice`] for negative, NaN or infinite prices.
pub fn validate_price(price: f64) -> Result<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(Error::InvalidPrice { price });
    }
    Ok(price)
}

/// Checks that a rating is between 1 and 5.
///
/// # Errors
/// Returns [`Error::InvalidRating`] outside that range.
pub fn validate_rating(rating: u8) -> Result<u8> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(Error::InvalidRating { rating })
    }
}

/// All orderable items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Creates an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from stored items, holding them to the rules enforced on writes.
    ///
    /// # Errors
    /// Returns [`Error::InvalidItemId`] for id 0, [`Error::DuplicateItemId`] if
    /// two items share an id, [`Error::InvalidName`] for a blank name,
    /// [`Error::InvalidPrice`] or [`Error::InvalidRating`] for a stored review
    /// outside 1-5.
    pub fn from_items(items: Vec<MenuItem>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id == 0 {
                return Err(Error::InvalidItemId { id: item.id });
            }
            if !seen.insert(item.id) {
                return Err(Error::DuplicateItemId { id: item.id });
            }
            if item.name.trim().is_empty() {
                return Err(Error::InvalidName);
            }
            validate_price(item.price)?;
            for &rating in &item.reviews {
                validate_rating(rating)?;
            }
        }
        Ok(Self { items })
    }

    /// Items in catalog order
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds an item by id, `None` when absent.
    #[must_use]
    pub fn find_by_id(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn find_by_id_mut(&mut self, id: u32) -> Result<&mut MenuItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(Error::ItemNotFound { id })
    }

    /// Average rating of the item with `id`, 0 when it has no reviews.
    ///
    /// # Errors
    /// Returns [`Error::ItemNotFound`] if no item has this id.
    pub fn average_rating(&self, id: u32) -> Result<f64> {
        self.find_by_id(id)
            .map(MenuItem::average_rating)
            .ok_or(Error::ItemNotFound { id })
    }

    /// Id the next added item will receive.
    ///
    /// Normally catalog size + 1; if stored data has gaps that would collide
    /// with an existing id, the id after the current maximum is used instead.
    #[must_use]
    pub fn next_id(&self) -> u32 {
        let by_count = u32::try_from(self.items.len()).unwrap_or(u32::MAX).saturating_add(1);
        let by_max = self
            .items
            .iter()
            .map(|item| item.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        by_count.max(by_max)
    }

    /// Appends a rating to an item's reviews.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRating`] outside 1-5 or [`Error::ItemNotFound`]
    /// for an unknown id.
    pub fn add_review(&mut self, id: u32, rating: u8) -> Result<&MenuItem> {
        let rating = validate_rating(rating)?;
        let item = self.find_by_id_mut(id)?;
        item.reviews.push(rating);
        Ok(item)
    }

    /// Replaces an item's price, returning the previous one.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPrice`] or [`Error::ItemNotFound`].
    pub fn update_price(&mut self, id: u32, new_price: f64) -> Result<f64> {
        let new_price = validate_price(new_price)?;
        let item = self.find_by_id_mut(id)?;
        Ok(std::mem::replace(&mut item.price, new_price))
    }

    /// Appends a new item with no reviews.
    ///
    /// # Errors
    /// Returns [`Error::InvalidName`] for a blank name or [`Error::InvalidPrice`].
    pub fn add_item(&mut self, name: &str, price: f64, is_vegetarian: bool) -> Result<&MenuItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidName);
        }
        let price = validate_price(price)?;

        let item = MenuItem {
            id: self.next_id(),
            name: name.to_string(),
            price,
            is_vegetarian,
            reviews: Vec::new(),
        };
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Menu table with id, name, price, diet label and average rating
    #[must_use]
    pub fn render(&self) -> String {
        report::format_menu_table(&self.items)
    }

    pub(crate) fn restore_price(&mut self, id: u32, price: f64) {
        if let Ok(item) = self.find_by_id_mut(id) {
            item.price = price;
        }
    }

    pub(crate) fn remove_last_review(&mut self, id: u32) {
        if let Ok(item) = self.find_by_id_mut(id) {
            item.reviews.pop();
        }
    }

    pub(crate) fn remove_last_item(&mut self) {
        self.items.pop();
    }
}
