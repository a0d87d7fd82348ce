//! Order session - the cart-building state machine for one interactive order.
//!
//! A session moves `Building -> ConfirmPending -> Confirmed | Cancelled`.
//! Adding an item that is already in the cart merges into the existing line:
//! quantities add up and each addition contributes `quantity * price` at the
//! moment it was made, so the line total is never recomputed from the catalog.

use crate::{
    core::{menu::MenuCatalog, report},
    entities::TransactionRecord,
    errors::{Error, Result},
};
use chrono::NaiveDateTime;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState {
    /// Accepting items
    Building,
    /// Waiting for the customer to confirm or cancel
    ConfirmPending,
    /// Handed to the ledger
    Confirmed,
    /// Discarded
    Cancelled,
}

/// One cart line
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    /// Id of the ordered item
    pub item_id: u32,
    /// Item name when first added
    pub item_name: String,
    /// Units ordered
    pub quantity: u32,
    /// Sum of quantity times price over every addition
    pub line_total: f64,
}

/// What an accepted addition did to the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineUpdate {
    /// A new line was created
    Added,
    /// An existing line for the same item grew
    Merged,
}

/// A cart being built by one customer
#[derive(Debug, Clone)]
pub struct OrderSession {
    state: OrderState,
    lines: Vec<OrderLine>,
}

impl Default for OrderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSession {
    /// Starts an empty session in `Building`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: OrderState::Building,
            lines: Vec::new(),
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> OrderState {
        self.state
    }

    /// Whether the session has been confirmed or cancelled
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, OrderState::Confirmed | OrderState::Cancelled)
    }

    /// Cart lines in the order they were first added
    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Sum of all line totals
    #[must_use]
    pub fn total(&self) -> f64 {
        self.lines.iter().map(|line| line.line_total).sum()
    }

    fn expect_state(&self, expected: OrderState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(Error::InvalidOrderState {
                expected,
                actual: self.state,
            })
        }
    }

    /// Adds `quantity` units of item `item_id`, merging with an existing line.
    ///
    /// # Errors
    /// Returns [`Error::InvalidOrderState`] unless building,
    /// [`Error::InvalidQuantity`] for zero or when the merged quantity would not
    /// fit in a `u32`, or [`Error::ItemNotFound`]; the cart is unchanged in every
    /// error case.
    pub fn add_item(
        &mut self,
        catalog: &MenuCatalog,
        item_id: u32,
        quantity: u32,
    ) -> Result<LineUpdate> {
        self.expect_state(OrderState::Building)?;
        if quantity == 0 {
            return Err(Error::InvalidQuantity { quantity });
        }
        let item = catalog
            .find_by_id(item_id)
            .ok_or(Error::ItemNotFound { id: item_id })?;
        let addition_total = f64::from(quantity) * item.price;

        if let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item_id) {
            line.quantity = line
                .quantity
                .checked_add(quantity)
                .ok_or(Error::InvalidQuantity { quantity })?;
            line.line_total += addition_total;
            return Ok(LineUpdate::Merged);
        }

        self.lines.push(OrderLine {
            item_id,
            item_name: item.name.clone(),
            quantity,
            line_total: addition_total,
        });
        Ok(LineUpdate::Added)
    }

    /// Stops accepting items and waits for confirmation.
    ///
    /// # Errors
    /// Returns [`Error::InvalidOrderState`] unless building, or
    /// [`Error::EmptyOrder`] if nothing was added.
    pub fn finish_adding(&mut self) -> Result<()> {
        self.expect_state(OrderState::Building)?;
        if self.lines.is_empty() {
            return Err(Error::EmptyOrder);
        }
        self.state = OrderState::ConfirmPending;
        Ok(())
    }

    /// Confirms the order, turning every line into a record stamped with `timestamp`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidOrderState`] unless confirmation is pending.
    pub fn confirm(&mut self, timestamp: NaiveDateTime) -> Result<Vec<TransactionRecord>> {
        let records = self.records_at(timestamp)?;
        self.mark_confirmed();
        Ok(records)
    }

    /// Records the pending order would produce, without leaving `ConfirmPending`.
    pub(crate) fn records_at(&self, timestamp: NaiveDateTime) -> Result<Vec<TransactionRecord>> {
        self.expect_state(OrderState::ConfirmPending)?;
        Ok(self
            .lines
            .iter()
            .map(|line| TransactionRecord {
                item_id: line.item_id,
                quantity: line.quantity,
                line_total: line.line_total,
                item_name: line.item_name.clone(),
                timestamp: Some(timestamp),
            })
            .collect())
    }

    pub(crate) fn mark_confirmed(&mut self) {
        self.state = OrderState::Confirmed;
    }

    /// Discards the cart.
    ///
    /// # Errors
    /// Returns [`Error::InvalidOrderState`] if the session already ended.
    pub fn cancel(&mut self) -> Result<()> {
        if self.is_finished() {
            return Err(Error::InvalidOrderState {
                expected: OrderState::ConfirmPending,
                actual: self.state,
            });
        }
        self.lines.clear();
        self.state = OrderState::Cancelled;
        Ok(())
    }

    /// "Current Order" listing with per-line and session totals
    #[must_use]
    pub fn render_cart(&self) -> String {
        report::format_cart(&self.lines, self.total())
    }
}
