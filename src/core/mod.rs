//! Core business logic - framework-agnostic catalog, ordering, ledger and admin operations.
//!
//! Nothing in here touches the console. Types here hold the in-memory state and
//! enforce its rules; [`service::ManagementService`] ties them to a [`crate::store::Store`].

/// Admin credential checks
pub mod admin;
/// Confirmed-order ledger
pub mod ledger;
/// Menu catalog
pub mod menu;
/// Cart-building state machine
pub mod order;
/// Table and amount formatting
pub mod report;
/// Orchestration of the user-facing operations
pub mod service;

pub use admin::AdminGate;
pub use ledger::TransactionLedger;
pub use menu::MenuCatalog;
pub use order::{LineUpdate, OrderLine, OrderSession, OrderState};
pub use service::{AdminGrant, ManagementService};
