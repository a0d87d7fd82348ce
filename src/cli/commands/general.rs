//! General commands - show menu and exit.

use crate::{cli::Console, core::ManagementService, errors::Result, store::Store};

/// Prints the menu table.
///
/// # Errors
/// Returns console errors.
pub fn show_menu<S: Store, C: Console>(service: &ManagementService<S>, console: &mut C) -> Result<()> {
    console.write_line(&service.show_menu())
}

/// Prints the farewell message.
///
/// # Errors
/// Returns console errors.
pub fn exit_program<C: Console>(console: &mut C) -> Result<()> {
    console.write_line("Exiting the Restaurant Management System. Thank you!")
}
