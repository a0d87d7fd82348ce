//! Console interface - the interactive main menu and its seven operations.
//!
//! The loop blocks on each console read and runs one operation at a time.
//! Rejections (unknown ids, bad credentials, invalid values) are shown to the
//! user and control returns to the main menu; end of input ends the loop.

/// Operation handlers for each main-menu entry
pub mod commands;
/// Console trait and stdio implementation
pub mod console;
/// Prompting and parsing helpers
pub mod input;

pub use console::{Console, StdConsole};

use crate::{
    core::ManagementService,
    errors::{Error, Result},
    store::Store,
};
use std::{ops::ControlFlow, str::FromStr};
use tracing::{error, info, warn};

const MAIN_MENU: &str = "\n------ Restaurant Management System ------\n\
1. Show Menu\n\
2. Order Items\n\
3. Show Order History\n\
4. Update Menu (Admin Only)\n\
5. Add New Item to Menu (Admin Only)\n\
6. Review Item\n\
7. Exit";

const CHOICE_PROMPT: &str = "Enter your choice (1-7): ";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    /// 1 - show the menu table
    ShowMenu,
    /// 2 - build and confirm an order
    OrderItems,
    /// 3 - show the order history
    ShowHistory,
    /// 4 - change an item's price (admin)
    UpdateMenu,
    /// 5 - add a new item (admin)
    AddNewProduct,
    /// 6 - rate an item
    ReviewItem,
    /// 7 - leave the program
    Exit,
}

impl FromStr for MainMenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(Self::ShowMenu),
            "2" => Ok(Self::OrderItems),
            "3" => Ok(Self::ShowHistory),
            "4" => Ok(Self::UpdateMenu),
            "5" => Ok(Self::AddNewProduct),
            "6" => Ok(Self::ReviewItem),
            "7" => Ok(Self::Exit),
            other => Err(Error::InvalidInput {
                message: format!("'{other}' is not a menu choice"),
            }),
        }
    }
}

/// Runs the main loop until the user exits or input ends.
///
/// # Errors
/// Returns an error only when the console itself fails.
pub fn run<S: Store, C: Console>(service: &mut ManagementService<S>, console: &mut C) -> Result<()> {
    info!("Restaurant Management System started");
    loop {
        console.write_line(MAIN_MENU)?;
        let raw = match console.read_line(CHOICE_PROMPT) {
            Ok(raw) => raw,
            Err(Error::InputClosed) => {
                info!("Input closed, leaving main loop");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let Ok(choice) = raw.parse::<MainMenuChoice>() else {
            console.write_line("Invalid choice. Please enter a valid option.")?;
            continue;
        };

        match dispatch(choice, service, console) {
            Ok(ControlFlow::Continue(())) => {}
            Ok(ControlFlow::Break(())) => return Ok(()),
            Err(Error::InputClosed) => {
                info!("Input closed during {:?}, leaving main loop", choice);
                return Ok(());
            }
            Err(e) if e.is_user_error() => {
                warn!("{:?} rejected: {}", choice, e);
                console.write_line(&format!("{e}. Please try again."))?;
            }
            Err(e @ (Error::Io(_) | Error::Json(_))) => {
                error!("{:?} failed: {}", choice, e);
                console.write_line(&format!("Operation failed, nothing was changed: {e}"))?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Runs one menu entry; `Break` ends the main loop.
fn dispatch<S: Store, C: Console>(
    choice: MainMenuChoice,
    service: &mut ManagementService<S>,
    console: &mut C,
) -> Result<ControlFlow<()>> {
    match choice {
        MainMenuChoice::ShowMenu => commands::general::show_menu(service, console)?,
        MainMenuChoice::OrderItems => commands::order::order_items(service, console)?,
        MainMenuChoice::ShowHistory => commands::order::show_history(service, console)?,
        MainMenuChoice::UpdateMenu => commands::product::update_menu(service, console)?,
        MainMenuChoice::AddNewProduct => commands::product::add_new_product(service, console)?,
        MainMenuChoice::ReviewItem => commands::product::review_item(service, console)?,
        MainMenuChoice::Exit => {
            commands::general::exit_program(console)?;
            return Ok(ControlFlow::Break(()));
        }
    }
    Ok(ControlFlow::Continue(()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::MenuItem;
    use crate::store::Collection;
    use crate::test_utils::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!("1".parse::<MainMenuChoice>().unwrap(), MainMenuChoice::ShowMenu);
        assert_eq!(" 7 ".parse::<MainMenuChoice>().unwrap(), MainMenuChoice::Exit);
        assert!("8".parse::<MainMenuChoice>().is_err());
        assert!("".parse::<MainMenuChoice>().is_err());
    }

    #[test]
    fn test_exit_ends_loop() -> Result<()> {
        let mut service = setup_test_service()?;
        let mut console = scripted_console(&["7", "1"]);

        run(&mut service, &mut console)?;

        let output = console_output(&console);
        assert!(output.contains("Exiting the Restaurant Management System. Thank you!"));
        assert_eq!(output.matches("Restaurant Management System ------").count(), 1);
        Ok(())
    }

    #[test]
    fn test_dispatch_exit_breaks_and_others_continue() -> Result<()> {
        let mut service = setup_test_service()?;
        let mut console = scripted_console(&[]);

        let flow = dispatch(MainMenuChoice::ShowMenu, &mut service, &mut console)?;
        assert_eq!(flow, ControlFlow::Continue(()));

        let flow = dispatch(MainMenuChoice::Exit, &mut service, &mut console)?;
        assert_eq!(flow, ControlFlow::Break(()));
        assert!(console_output(&console).contains("Thank you!"));
        Ok(())
    }

    #[test]
    fn test_invalid_choice_reprompts() -> Result<()> {
        let mut service = setup_test_service()?;
        let mut console = scripted_console(&["9", "abc", "7"]);

        run(&mut service, &mut console)?;

        let output = console_output(&console);
        assert_eq!(output.matches("Invalid choice. Please enter a valid option.").count(), 2);
        assert_eq!(output.matches(CHOICE_PROMPT).count(), 3);
        Ok(())
    }

    #[test]
    fn test_end_of_input_is_graceful() -> Result<()> {
        let mut service = setup_test_service()?;
        let mut console = scripted_console(&["2", "1"]);

        // Input runs out in the middle of an order
        run(&mut service, &mut console)?;
        assert!(service.ledger().is_empty());
        Ok(())
    }

    #[test]
    fn test_full_session() -> Result<()> {
        let mut service = setup_test_service()?;
        let mut console = scripted_console(&[
            // order 2 + 3 Masala Tea and confirm
            "2", "1", "2", "y", "1", "3", "n", "y",
            // new product as admin
            "5", TEST_ADMIN_USER, TEST_ADMIN_PASSWORD, "Mango Lassi", "3.20", "Y",
            // review it
            "6", "4", "5",
            // price change with wrong password
            "4", TEST_ADMIN_USER, "nope",
            "3", "7",
        ]);

        run(&mut service, &mut console)?;

        let records = service.ledger().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].quantity, 5);
        assert!((records[0].line_total - 12.5).abs() < 1e-9);

        let lassi = service.catalog().find_by_id(4).unwrap();
        assert_eq!(lassi.name, "Mango Lassi");
        assert!(lassi.is_vegetarian);
        assert_eq!(lassi.reviews, vec![5]);

        let stored: Vec<MenuItem> = service.store().load(Collection::Menu)?;
        assert_eq!(stored.len(), 4);

        let output = console_output(&console);
        assert!(output.contains("Order confirmed. Thank you!"));
        assert!(output.contains("Added 3 Masala Tea to your existing order."));
        assert!(output.contains("New product 'Mango Lassi' added to the menu successfully!"));
        assert!(output.contains("Review added successfully!"));
        assert!(output.contains("you are not an admin. Please try again."));
        assert!(output.contains("12.50"));
        Ok(())
    }

    #[test]
    fn test_storage_failure_returns_to_menu() -> Result<()> {
        let mut service = setup_test_service()?;
        service.store_mut().set_fail_writes(true);
        let mut console = scripted_console(&["6", "1", "3", "7"]);

        run(&mut service, &mut console)?;

        let output = console_output(&console);
        assert!(output.contains("Operation failed, nothing was changed"));
        assert_eq!(service.catalog().find_by_id(1).unwrap().reviews, vec![5, 4]);
        Ok(())
    }
}
