//! Plain-text rendering for the trip document
//!
//! Produces fixed-width tables that read well in any text viewer,
//! independent of terminal styling.

use crate::models::CategoryTotals;

/// Width of the left-justified category column
pub const CATEGORY_WIDTH: usize = 25;

/// Width of the right-justified amount column
pub const AMOUNT_WIDTH: usize = 15;

/// Render category totals as a two-column table
///
/// ```text
/// Category                          Amount
/// ----------------------------------------
/// Flights/Transport                £350.00
/// ...
/// ----------------------------------------
/// Total                            £350.00
/// ```
pub fn render_table(totals: &CategoryTotals, symbol: &str) -> String {
    let rule = "-".repeat(CATEGORY_WIDTH + AMOUNT_WIDTH);
    let mut output = String::new();

    output.push_str(&format!(
        "{:<cw$}{:>aw$}\n",
        "Category",
        "Amount",
        cw = CATEGORY_WIDTH,
        aw = AMOUNT_WIDTH
    ));
    output.push_str(&rule);
    output.push('\n');

    for (category, amount) in totals.iter() {
        output.push_str(&format!(
            "{:<cw$}{:>aw$}\n",
            category.label(),
            amount.format_with_symbol(symbol),
            cw = CATEGORY_WIDTH,
            aw = AMOUNT_WIDTH
        ));
    }

    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format!(
        "{:<cw$}{:>aw$}",
        "Total",
        totals.sum().format_with_symbol(symbol),
        cw = CATEGORY_WIDTH,
        aw = AMOUNT_WIDTH
    ));

    output
}
