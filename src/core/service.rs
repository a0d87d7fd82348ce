//! Management service - the seven user-facing operations over catalog, ledger and admins.
//!
//! The service owns the in-memory collections, loaded once from the store at
//! startup. Every mutation is applied in memory and then the whole affected
//! collection is saved; if the save fails the in-memory change is undone so
//! memory and storage stay in step.

use crate::{
    core::{
        admin::AdminGate,
        ledger::TransactionLedger,
        menu::MenuCatalog,
        order::OrderSession,
    },
    entities::{AdminCredential, MenuItem, TransactionRecord},
    errors::{Error, Result},
    store::{Collection, Store},
};
use chrono::{Local, NaiveDateTime};
use tracing::{error, info, warn};

/// Proof that the caller passed the admin gate for one privileged operation.
///
/// Only [`ManagementService::authorize`] can create one.
#[derive(Debug)]
pub struct AdminGrant {
    username: String,
}

impl AdminGrant {
    /// Admin the grant was issued to
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Owns the catalog, ledger and admin list and persists them through `S`
#[derive(Debug)]
pub struct ManagementService<S: Store> {
    store: S,
    catalog: MenuCatalog,
    ledger: TransactionLedger,
    admins: AdminGate,
}

impl<S: Store> ManagementService<S> {
    /// Loads all three collections from `store`.
    ///
    /// # Errors
    /// Returns an error if a collection cannot be decoded or holds records
    /// that break the catalog or ledger rules (see [`MenuCatalog::from_items`]
    /// and [`TransactionLedger::from_records`]).
    pub fn load(store: S) -> Result<Self> {
        let items: Vec<MenuItem> = store.load(Collection::Menu)?;
        let records: Vec<TransactionRecord> = store.load(Collection::Transactions)?;
        let admins: Vec<AdminCredential> = store.load(Collection::Admins)?;

        let catalog = MenuCatalog::from_items(items)
            .inspect_err(|e| error!("Stored menu rejected: {}", e))?;
        let ledger = TransactionLedger::from_records(records)
            .inspect_err(|e| error!("Stored transactions rejected: {}", e))?;
        info!(
            "Loaded {} menu items, {} transactions, {} admins",
            catalog.len(),
            ledger.len(),
            admins.len()
        );
        if admins.is_empty() {
            warn!("No admins configured; admin operations will always be refused");
        }

        Ok(Self {
            store,
            catalog,
            ledger,
            admins: AdminGate::new(admins),
        })
    }

    /// The menu catalog
    #[must_use]
    pub const fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// The transaction ledger
    #[must_use]
    pub const fn ledger(&self) -> &TransactionLedger {
        &self.ledger
    }

    /// The backing store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store
    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Menu table
    #[must_use]
    pub fn show_menu(&self) -> String {
        self.catalog.render()
    }

    /// Order history table with grand total
    #[must_use]
    pub fn show_history(&self) -> String {
        self.ledger.render(&self.catalog)
    }

    /// Starts a fresh order session
    #[must_use]
    pub const fn start_order(&self) -> OrderSession {
        OrderSession::new()
    }

    /// Confirms a pending session at the current local time.
    ///
    /// # Errors
    /// See [`Self::confirm_order_at`].
    pub fn confirm_order(&mut self, session: &mut OrderSession) -> Result<usize> {
        self.confirm_order_at(session, Local::now().naive_local())
    }

    /// Confirms a pending session, appends its lines to the ledger and saves it.
    ///
    /// Returns the number of records written. If saving fails the ledger is
    /// restored and the session stays pending.
    ///
    /// # Errors
    /// Returns [`Error::InvalidOrderState`] unless the session is pending, or the
    /// storage error if saving fails.
    pub fn confirm_order_at(
        &mut self,
        session: &mut OrderSession,
        timestamp: NaiveDateTime,
    ) -> Result<usize> {
        let records = session.records_at(timestamp)?;
        let previous_len = self.ledger.len();
        let count = self.ledger.append(records);

        if let Err(e) = self
            .store
            .save(Collection::Transactions, self.ledger.records())
        {
            error!("Failed to save transactions, rolling back order: {}", e);
            self.ledger.truncate(previous_len);
            return Err(e);
        }

        session.mark_confirmed();
        info!("Order confirmed with {} lines", count);
        Ok(count)
    }

    /// Checks admin credentials.
    ///
    /// # Errors
    /// Returns [`Error::AuthenticationFailed`] if the pair is not an admin.
    pub fn authorize(&self, username: &str, password: &str) -> Result<AdminGrant> {
        if self.admins.authenticate(username, password) {
            info!("Admin '{}' authenticated", username);
            Ok(AdminGrant {
                username: username.to_string(),
            })
        } else {
            warn!("Rejected admin credentials for '{}'", username);
            Err(Error::AuthenticationFailed {
                username: username.to_string(),
            })
        }
    }

    /// Changes an item's price and saves the menu, returning the old price.
    ///
    /// # Errors
    /// Returns [`Error::ItemNotFound`], [`Error::InvalidPrice`] or a storage error.
    pub fn update_price(&mut self, grant: &AdminGrant, id: u32, new_price: f64) -> Result<f64> {
        let old_price = self.catalog.update_price(id, new_price)?;

        if let Err(e) = self.persist_menu() {
            self.catalog.restore_price(id, old_price);
            return Err(e);
        }

        info!(
            "Admin '{}' changed price of item {} from {:.2} to {:.2}",
            grant.username(),
            id,
            old_price,
            new_price
        );
        Ok(old_price)
    }

    /// Adds a new item and saves the menu.
    ///
    /// # Errors
    /// Returns [`Error::InvalidName`], [`Error::InvalidPrice`] or a storage error.
    pub fn add_item(
        &mut self,
        grant: &AdminGrant,
        name: &str,
        price: f64,
        is_vegetarian: bool,
    ) -> Result<MenuItem> {
        let item = self.catalog.add_item(name, price, is_vegetarian)?.clone();

        if let Err(e) = self.persist_menu() {
            self.catalog.remove_last_item();
            return Err(e);
        }

        info!(
            "Admin '{}' added item {} '{}'",
            grant.username(),
            item.id,
            item.name
        );
        Ok(item)
    }

    /// Records a rating for an item and saves the menu, returning the new average.
    ///
    /// # Errors
    /// Returns [`Error::ItemNotFound`], [`Error::InvalidRating`] or a storage error.
    pub fn review_item(&mut self, id: u32, rating: u8) -> Result<f64> {
        let average = self.catalog.add_review(id, rating)?.average_rating();

        if let Err(e) = self.persist_menu() {
            self.catalog.remove_last_review(id);
            return Err(e);
        }

        info!("Item {} rated {}, average now {:.2}", id, rating, average);
        Ok(average)
    }

    fn persist_menu(&mut self) -> Result<()> {
        self.store
            .save(Collection::Menu, self.catalog.items())
            .inspect_err(|e| error!("Failed to save menu: {}", e))
    }
}
