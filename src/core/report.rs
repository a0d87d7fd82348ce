//! Report formatting.
//!
//! Pure functions that turn catalog, cart and ledger data into the fixed-width
//! text tables shown on the console. Amounts always use two decimals.

use crate::{core::ledger::ResolvedRecord, core::order::OrderLine, entities::MenuItem};

const MENU_RULE_WIDTH: usize = 65;
const HISTORY_RULE_WIDTH: usize = 90;

/// Formats a dollar amount like "$12.50"
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Menu table: ID, Name, Price, Veg/Non-Veg and average rating
#[must_use]
pub fn format_menu_table(items: &[MenuItem]) -> String {
    let rule = "=".repeat(MENU_RULE_WIDTH);
    let mut lines = Vec::with_capacity(items.len() + 4);

    lines.push(String::new());
    lines.push(format!(
        "{:<5} {:<25} {:<10} {:<10} {:<15}",
        "ID", "Name", "Price ($)", "Veg", "Average Rating"
    ));
    lines.push(rule.clone());
    for item in items {
        lines.push(format!(
            "{:<5} {:<25} {:<10.2} {:<10} {:<15.2}",
            item.id,
            item.name,
            item.price,
            item.diet_label(),
            item.average_rating()
        ));
    }
    lines.push(rule);

    lines.join("\n")
}

/// Order history table with a closing grand total line
#[must_use]
pub fn format_history_table(rows: &[ResolvedRecord<'_>], grand_total: f64) -> String {
    let rule = "=".repeat(HISTORY_RULE_WIDTH);
    let mut lines = Vec::with_capacity(rows.len() + 6);

    lines.push(String::new());
    lines.push(format!(
        "{:<5} {:<25} {:<10} {:<20} {:<20}",
        "S No.", "Name", "Quantity", "Total Price ($)", "Date Time"
    ));
    lines.push(rule.clone());
    for row in rows {
        lines.push(format!(
            "{:<5} {:<25} {:<10} {:<20.2} {:<20}",
            row.serial,
            row.item.name,
            row.record.quantity,
            row.record.line_total,
            row.record.display_timestamp()
        ));
    }
    lines.push(rule.clone());
    lines.push(format!("{:<60} {:<20.2}", "Total Price:", grand_total));
    lines.push(rule);

    lines.join("\n")
}

/// "Current Order" listing for an in-progress cart
#[must_use]
pub fn format_cart(lines: &[OrderLine], total: f64) -> String {
    let mut out = vec![String::new(), "Current Order:".to_string()];
    out.extend(lines.iter().map(|line| {
        format!(
            "{} {} - Total: {}",
            line.quantity,
            line.item_name,
            format_price(line.line_total)
        )
    }));
    out.push(format!("Order Total: {}", format_price(total)));
    out.join("\n")
}
