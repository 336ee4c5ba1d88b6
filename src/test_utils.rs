//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating owned ledger rows with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{
        auth::UserContext,
        budget::{self, BudgetInput},
        category::Category,
        expense::{self, ExpenseInput},
        goal::{self, GoalInput},
        reminder::{self, ReminderInput},
    },
    entities::{self, user},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Shorthand for a calendar date in tests.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Inserts a user directly, skipping password hashing, and returns its context.
///
/// # Defaults
/// * `email`: `"{username}@example.com"`
pub async fn create_test_user(db: &DatabaseConnection, username: &str) -> Result<UserContext> {
    let model = user::ActiveModel {
        username: Set(username.to_string()),
        email: Set(format!("{username}@example.com")),
        password_hash: Set("not-a-real-hash".to_string()),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(UserContext::from(&model))
}

/// Creates an expense without a description.
pub async fn create_test_expense(
    db: &DatabaseConnection,
    ctx: &UserContext,
    amount: f64,
    category: Category,
    on: NaiveDate,
) -> Result<entities::expense::Model> {
    create_described_expense(db, ctx, amount, category, on, None).await
}

/// Creates an expense with an optional description.
pub async fn create_described_expense(
    db: &DatabaseConnection,
    ctx: &UserContext,
    amount: f64,
    category: Category,
    on: NaiveDate,
    description: Option<&str>,
) -> Result<entities::expense::Model> {
    expense::create_expense(
        db,
        ctx,
        ExpenseInput {
            amount,
            category,
            date: on,
            description: description.map(str::to_string),
        },
    )
    .await
}

/// Creates a budget covering `start..=end`.
pub async fn create_test_budget(
    db: &DatabaseConnection,
    ctx: &UserContext,
    category: Category,
    limit_amount: f64,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<entities::budget::Model> {
    budget::create_budget(
        db,
        ctx,
        BudgetInput {
            category,
            limit_amount,
            start_date: start,
            end_date: end,
        },
    )
    .await
}

/// Creates a reminder.
///
/// # Defaults
/// * `amount`: 50.0
pub async fn create_test_reminder(
    db: &DatabaseConnection,
    ctx: &UserContext,
    bill_name: &str,
    due: NaiveDate,
) -> Result<entities::reminder::Model> {
    reminder::create_reminder(
        db,
        ctx,
        ReminderInput {
            bill_name: bill_name.to_string(),
            due_date: due,
            amount: 50.0,
        },
    )
    .await
}

/// Creates a savings goal.
pub async fn create_test_goal(
    db: &DatabaseConnection,
    ctx: &UserContext,
    name: &str,
    target_amount: f64,
    current_amount: f64,
    due: NaiveDate,
) -> Result<entities::goal::Model> {
    goal::create_goal(
        db,
        ctx,
        GoalInput {
            name: name.to_string(),
            target_amount,
            current_amount,
            due_date: due,
        },
    )
    .await
}

/// Sets up a database with one user.
/// Returns (db, ctx) for common test scenarios.
pub async fn setup_with_user() -> Result<(DatabaseConnection, UserContext)> {
    let db = setup_test_db().await?;
    let ctx = create_test_user(&db, "alice").await?;
    Ok((db, ctx))
}

/// Sets up the three-expense scenario used across report tests:
/// 100 food on 2024-01-05, 50 food on 2024-02-10, 30 transport on 2024-01-20.
pub async fn setup_with_scenario_expenses() -> Result<(DatabaseConnection, UserContext)> {
    let (db, ctx) = setup_with_user().await?;
    create_test_expense(&db, &ctx, 100.0, Category::Food, date(2024, 1, 5)).await?;
    create_test_expense(&db, &ctx, 50.0, Category::Food, date(2024, 2, 10)).await?;
    create_test_expense(&db, &ctx, 30.0, Category::Transport, date(2024, 1, 20)).await?;
    Ok((db, ctx))
}
