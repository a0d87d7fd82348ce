//! Product commands - admin price updates, new products and customer reviews.
//!
//! The two admin commands ask for credentials first and stop before asking
//! anything else if they are rejected.

use crate::{
    cli::{
        Console,
        input::{prompt_non_empty, prompt_parse, prompt_price, prompt_rating, prompt_yes},
    },
    core::{AdminGrant, ManagementService},
    errors::{Error, Result},
    store::Store,
};

fn authorize_admin<S: Store, C: Console>(
    service: &ManagementService<S>,
    console: &mut C,
) -> Result<AdminGrant> {
    let username = console.read_line("Enter admin username: ")?;
    let password = console.read_line("Enter admin password: ")?;
    service.authorize(&username, &password)
}

fn prompt_existing_item<S: Store, C: Console>(
    service: &ManagementService<S>,
    console: &mut C,
    prompt: &str,
) -> Result<u32> {
    console.write_line(&service.show_menu())?;
    let item_id: u32 = prompt_parse(console, prompt, "a valid item ID")?;
    if service.catalog().find_by_id(item_id).is_none() {
        return Err(Error::ItemNotFound { id: item_id });
    }
    Ok(item_id)
}

/// Changes the price of an existing item (admin only).
///
/// # Errors
/// Returns [`Error::AuthenticationFailed`], [`Error::ItemNotFound`], console
/// errors or a storage error.
pub fn update_menu<S: Store, C: Console>(
    service: &mut ManagementService<S>,
    console: &mut C,
) -> Result<()> {
    let grant = authorize_admin(service, console)?;
    let item_id = prompt_existing_item(service, console, "Enter the item ID you want to update: ")?;
    let new_price = prompt_price(console, "Enter the new price: $")?;

    service.update_price(&grant, item_id, new_price)?;
    console.write_line("Menu updated successfully!")
}

/// Adds a new item to the menu (admin only).
///
/// # Errors
/// Returns [`Error::AuthenticationFailed`], console errors or a storage error.
pub fn add_new_product<S: Store, C: Console>(
    service: &mut ManagementService<S>,
    console: &mut C,
) -> Result<()> {
    let grant = authorize_admin(service, console)?;
    let name = prompt_non_empty(console, "\nEnter the name of the new product: ")?;
    let price = prompt_price(console, "Enter the price of the new product: $")?;
    let is_vegetarian = prompt_yes(console, "Is the new product vegetarian? (Y/N): ")?;

    let item = service.add_item(&grant, &name, price, is_vegetarian)?;
    console.write_line(&format!(
        "New product '{}' added to the menu successfully!",
        item.name
    ))
}

/// Adds a customer rating to an item.
///
/// # Errors
/// Returns [`Error::ItemNotFound`], console errors or a storage error.
pub fn review_item<S: Store, C: Console>(
    service: &mut ManagementService<S>,
    console: &mut C,
) -> Result<()> {
    let item_id = prompt_existing_item(service, console, "Enter the item ID you want to review: ")?;
    let rating = prompt_rating(console, "Enter your rating (1-5): ")?;

    service.review_item(item_id, rating)?;
    console.write_line("Review added successfully!")
}
