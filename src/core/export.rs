//! CSV export of filtered expenses.
//!
//! Columns are `Date,Category,Amount,Description`: ISO dates, capitalized
//! category keys, amounts with two decimals and an empty cell for a missing
//! description.

use crate::{
    core::{auth::UserContext, filter::ExpenseFilter},
    entities::expense,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use std::io::Write;
use tracing::info;

/// Header row written before any data.
pub const CSV_HEADER: [&str; 4] = ["Date", "Category", "Amount", "Description"];

/// Upper-cases the first character and lower-cases the rest.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Writes `expenses` as CSV to `writer` and returns the number of data rows.
pub fn write_expenses_csv<W: Write>(expenses: &[expense::Model], writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for row in expenses {
        csv_writer.write_record([
            row.date.format("%Y-%m-%d").to_string(),
            capitalize(&row.category),
            format!("{:.2}", row.amount),
            row.description.clone().unwrap_or_default(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(expenses.len())
}

/// Exports every expense of the caller matching `filter`, newest first.
pub async fn export_expenses_csv<W: Write>(
    db: &DatabaseConnection,
    ctx: &UserContext,
    filter: &ExpenseFilter,
    writer: W,
) -> Result<usize> {
    let expenses = crate::core::expense::find_expenses(db, ctx, filter).await?;
    let rows = write_expenses_csv(&expenses, writer)?;
    info!(user_id = ctx.user_id, rows, "Exported expenses to CSV");
    Ok(rows)
}
