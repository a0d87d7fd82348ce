//! Main-menu operation handlers.
//!
//! Each handler drives the console for one operation and delegates the actual
//! work to [`crate::core::ManagementService`]. Rejections are returned as errors
//! for the main loop to report.

/// Show menu and exit
pub mod general;
/// Ordering and order history
pub mod order;
/// Admin price/product edits and reviews
pub mod product;
