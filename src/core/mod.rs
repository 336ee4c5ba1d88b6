//! Framework-agnostic ledger logic: access control, owner-scoped stores,
//! aggregation and export.

/// Registration, login and the explicit caller context
pub mod auth;
/// Budget store
pub mod budget;
/// Fixed expense categories
pub mod category;
/// Expense store
pub mod expense;
/// CSV export
pub mod export;
/// Lenient parsing of expense list filters
pub mod filter;
/// Savings goal store
pub mod goal;
/// Paged result sets
pub mod pagination;
/// Bill reminder store
pub mod reminder;
/// Totals, averages and progress reports
pub mod report;
/// Field checks shared by the stores
pub mod validation;
