//! Expense list filters.
//!
//! Raw query parameters come in as strings. Anything empty or unparsable is
//! dropped with a debug log and the remaining filters still apply, so a bad
//! `date_from` never turns a listing into an error.

use crate::{
    core::{auth::UserContext, category::Category, pagination::normalize_page},
    entities::expense,
};
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, Condition,
    sea_query::{Expr, Func, LikeExpr},
};
use serde::Deserialize;
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d";
const LIKE_ESCAPE: char = '!';

/// Unvalidated filter values as received from a form or query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    /// Category key, empty for all
    pub category: Option<String>,
    /// Earliest date, `YYYY-MM-DD`
    pub date_from: Option<String>,
    /// Latest date, `YYYY-MM-DD`
    pub date_to: Option<String>,
    /// Smallest amount
    pub min_amount: Option<String>,
    /// Largest amount
    pub max_amount: Option<String>,
    /// Description substring
    pub search: Option<String>,
    /// Requested page, defaults to 1
    pub page: Option<String>,
}

/// Parsed expense filter. `None` fields do not constrain the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    /// Only this category
    pub category: Option<Category>,
    /// On or after this date
    pub date_from: Option<NaiveDate>,
    /// On or before this date
    pub date_to: Option<NaiveDate>,
    /// At least this amount
    pub min_amount: Option<f64>,
    /// At most this amount
    pub max_amount: Option<f64>,
    /// Literal description substring. Case folding covers ASCII letters
    /// only, matching `SQLite`'s `lower()`; other characters compare exactly.
    pub search: Option<String>,
}

fn non_empty(raw: Option<&String>) -> Option<&str> {
    raw.map(|value| value.trim()).filter(|value| !value.is_empty())
}

fn parse_date(field: &str, raw: Option<&String>) -> Option<NaiveDate> {
    let value = non_empty(raw)?;
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .inspect_err(|e| debug!("Ignoring {field} filter '{value}': {e}"))
        .ok()
}

fn parse_amount(field: &str, raw: Option<&String>) -> Option<f64> {
    let value = non_empty(raw)?;
    match value.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Some(amount),
        _ => {
            debug!("Ignoring {field} filter '{value}'");
            None
        }
    }
}

/// Escapes `LIKE` metacharacters so `term` only matches itself.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

/// Parses a page number; anything missing, unparsable or below 1 becomes 1.
#[must_use]
pub fn parse_page(raw: Option<&String>) -> u64 {
    non_empty(raw)
        .and_then(|value| value.parse::<u64>().ok())
        .map_or(1, normalize_page)
}

impl ExpenseFilter {
    /// Builds a filter from raw parameters, skipping values that do not parse.
    #[must_use]
    pub fn from_params(params: &FilterParams) -> Self {
        let category = non_empty(params.category.as_ref()).and_then(|value| {
            value
                .parse::<Category>()
                .inspect_err(|e| debug!("Ignoring category filter: {e}"))
                .ok()
        });

        Self {
            category,
            date_from: parse_date("date_from", params.date_from.as_ref()),
            date_to: parse_date("date_to", params.date_to.as_ref()),
            min_amount: parse_amount("min_amount", params.min_amount.as_ref()),
            max_amount: parse_amount("max_amount", params.max_amount.as_ref()),
            search: non_empty(params.search.as_ref()).map(str::to_string),
        }
    }

    /// SQL condition for this filter, always scoped to the caller's rows.
    #[must_use]
    pub fn condition(&self, ctx: &UserContext) -> Condition {
        let mut condition = Condition::all().add(expense::Column::UserId.eq(ctx.user_id));

        if let Some(category) = self.category {
            condition = condition.add(expense::Column::Category.eq(category.key()));
        }
        if let Some(from) = self.date_from {
            condition = condition.add(expense::Column::Date.gte(from));
        }
        if let Some(to) = self.date_to {
            condition = condition.add(expense::Column::Date.lte(to));
        }
        if let Some(min) = self.min_amount {
            condition = condition.add(expense::Column::Amount.gte(min));
        }
        if let Some(max) = self.max_amount {
            condition = condition.add(expense::Column::Amount.lte(max));
        }
        if let Some(search) = &self.search {
            let pattern = format!("%{}%", escape_like(&search.to_ascii_lowercase()));
            condition = condition.add(
                Expr::expr(Func::lower(Expr::col(expense::Column::Description)))
                    .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
            );
        }

        condition
    }
}
