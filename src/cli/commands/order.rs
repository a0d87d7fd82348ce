//! Order commands - interactive ordering and order history.

use crate::{
    cli::{
        Console,
        input::{prompt_parse, prompt_yes},
    },
    core::{LineUpdate, ManagementService},
    errors::{Error, Result},
    store::Store,
};
use tracing::debug;

/// Builds an order item by item, then confirms or cancels it.
///
/// Unknown ids and zero quantities are reported and the customer picks again;
/// the session only ends on confirm or cancel.
///
/// # Errors
/// Returns console errors or a storage error if the confirmed order cannot be saved.
pub fn order_items<S: Store, C: Console>(
    service: &mut ManagementService<S>,
    console: &mut C,
) -> Result<()> {
    let mut session = service.start_order();

    loop {
        console.write_line(&service.show_menu())?;
        let item_id: u32 = prompt_parse(
            console,
            "Enter the item ID you want to order: ",
            "a valid item ID",
        )?;
        let quantity: u32 = prompt_parse(console, "Enter the quantity: ", "a whole number")?;

        match session.add_item(service.catalog(), item_id, quantity) {
            Ok(update) => {
                let name = service
                    .catalog()
                    .find_by_id(item_id)
                    .map_or("", |item| item.name.as_str());
                let message = match update {
                    LineUpdate::Added => format!("Added {quantity} {name} to your order."),
                    LineUpdate::Merged => {
                        format!("Added {quantity} {name} to your existing order.")
                    }
                };
                console.write_line(&message)?;
            }
            Err(e @ (Error::ItemNotFound { .. } | Error::InvalidQuantity { .. })) => {
                debug!("Order line rejected: {}", e);
                console.write_line(&format!("{e}. Please try again."))?;
                continue;
            }
            Err(e) => return Err(e),
        }

        console.write_line(&session.render_cart())?;

        if prompt_yes(console, "Do you want to add more items? (Y/N): ")? {
            continue;
        }
        session.finish_adding()?;

        if prompt_yes(console, "Confirm your order? (Y/N): ")? {
            service.confirm_order(&mut session)?;
            console.write_line("Order confirmed. Thank you!")?;
        } else {
            session.cancel()?;
            console.write_line("Order canceled.")?;
        }
        return Ok(());
    }
}

/// Prints the order history with its grand total.
///
/// # Errors
/// Returns console errors.
pub fn show_history<S: Store, C: Console>(
    service: &ManagementService<S>,
    console: &mut C,
) -> Result<()> {
    console.write_line(&service.show_history())
}
