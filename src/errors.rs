//! Unified error type for the restaurant manager.
//!
//! Domain failures (unknown ids, rejected credentials, invalid values) and
//! infrastructure failures (file I/O, JSON, configuration) share one enum so
//! every layer can propagate with `?`.

use crate::core::order::OrderState;
use thiserror::Error;

/// All errors produced by the restaurant manager.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// No menu item carries the requested id
    #[error("Invalid item ID: {id}")]
    ItemNotFound {
        /// The id that failed to resolve
        id: u32,
    },

    /// Username/password pair is not in the admin list
    #[error("Authentication failed for '{username}': you are not an admin")]
    AuthenticationFailed {
        /// The username that was supplied
        username: String,
    },

    /// Price is negative, NaN or infinite
    #[error("Invalid price: {price}")]
    InvalidPrice {
        /// The rejected price
        price: f64,
    },

    /// Rating outside 1-5
    #[error("Invalid rating: {rating} (must be between 1 and 5)")]
    InvalidRating {
        /// The rejected rating
        rating: u8,
    },

    /// Order quantity of zero, or one that overflows the cart line
    #[error("Invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: u32,
    },

    /// Product name is empty after trimming
    #[error("Product name cannot be empty")]
    InvalidName,

    /// Tried to confirm an order with no lines
    #[error("Order is empty")]
    EmptyOrder,

    /// Order session transition not allowed from its current state
    #[error("Order session is {actual:?}, expected {expected:?}")]
    InvalidOrderState {
        /// State the operation requires
        expected: OrderState,
        /// State the session is actually in
        actual: OrderState,
    },

    /// Stored menu item with id 0
    #[error("Invalid menu item id {id} in stored menu (ids start at 1)")]
    InvalidItemId {
        /// The rejected id
        id: u32,
    },

    /// Two menu items loaded with the same id
    #[error("Duplicate menu item id {id} in stored menu")]
    DuplicateItemId {
        /// The repeated id
        id: u32,
    },

    /// Console input could not be parsed into the expected type
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the expected input
        message: String,
    },

    /// Console input reached end of stream
    #[error("Input stream closed")]
    InputClosed,

    /// Filesystem failure while loading or saving
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored collection is not valid JSON for its record type
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error is a user-facing rejection that leaves state untouched,
    /// as opposed to an infrastructure failure worth logging at error level.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ItemNotFound { .. }
                | Self::AuthenticationFailed { .. }
                | Self::InvalidPrice { .. }
                | Self::InvalidRating { .. }
                | Self::InvalidQuantity { .. }
                | Self::InvalidName
                | Self::EmptyOrder
                | Self::InvalidOrderState { .. }
                | Self::InvalidInput { .. }
        )
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
