//! Budget store - category spending limits over inclusive date ranges.
//!
//! A user can hold any number of budgets, including several for the same
//! category, each covering its own period.

use crate::{
    core::{auth::UserContext, category::Category, validation::require_positive_amount},
    entities::{Budget, budget},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{debug, info, instrument};

/// Fields of a budget as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetInput {
    /// Category the limit applies to
    pub category: Category,
    /// Limit in dollars, must be positive
    pub limit_amount: f64,
    /// First covered day
    pub start_date: NaiveDate,
    /// Last covered day, not before `start_date`
    pub end_date: NaiveDate,
}

impl BudgetInput {
    fn validate(&self) -> Result<()> {
        require_positive_amount(self.limit_amount)?;
        if self.end_date < self.start_date {
            return Err(Error::InvalidInput {
                message: format!(
                    "budget ends ({}) before it starts ({})",
                    self.end_date, self.start_date
                ),
            });
        }
        Ok(())
    }
}

async fn find_owned<C>(db: &C, ctx: &UserContext, budget_id: i64) -> Result<budget::Model>
where
    C: ConnectionTrait,
{
    Budget::find_by_id(budget_id)
        .filter(budget::Column::UserId.eq(ctx.user_id))
        .one(db)
        .await?
        .ok_or(Error::NotAuthorizedOrNotFound {
            entity: "budget",
            id: budget_id,
        })
}

/// Creates a budget for the caller.
#[instrument(skip(db, ctx, input), fields(user_id = ctx.user_id))]
pub async fn create_budget(
    db: &DatabaseConnection,
    ctx: &UserContext,
    input: BudgetInput,
) -> Result<budget::Model> {
    input.validate()?;

    let created = budget::ActiveModel {
        category: Set(input.category.key().to_string()),
        limit_amount: Set(input.limit_amount),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        user_id: Set(ctx.user_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    debug!(budget_id = created.id, "Created budget");
    Ok(created)
}

/// Fetches one of the caller's budgets.
pub async fn get_budget(db: &DatabaseConnection, ctx: &UserContext, budget_id: i64) -> Result<budget::Model> {
    find_owned(db, ctx, budget_id).await
}

/// Replaces the fields of one of the caller's budgets.
#[instrument(skip(db, ctx, input), fields(user_id = ctx.user_id))]
pub async fn update_budget(
    db: &DatabaseConnection,
    ctx: &UserContext,
    budget_id: i64,
    input: BudgetInput,
) -> Result<budget::Model> {
    input.validate()?;

    let txn = db.begin().await?;
    let existing = find_owned(&txn, ctx, budget_id).await?;

    let mut active_model: budget::ActiveModel = existing.into();
    active_model.category = Set(input.category.key().to_string());
    active_model.limit_amount = Set(input.limit_amount);
    active_model.start_date = Set(input.start_date);
    active_model.end_date = Set(input.end_date);
    let updated = active_model.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Deletes one of the caller's budgets.
#[instrument(skip(db, ctx), fields(user_id = ctx.user_id))]
pub async fn delete_budget(db: &DatabaseConnection, ctx: &UserContext, budget_id: i64) -> Result<()> {
    let result = Budget::delete_many()
        .filter(budget::Column::Id.eq(budget_id))
        .filter(budget::Column::UserId.eq(ctx.user_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotAuthorizedOrNotFound {
            entity: "budget",
            id: budget_id,
        });
    }
    info!(budget_id, "Deleted budget");
    Ok(())
}

/// All of the caller's budgets, most recent period first.
pub async fn list_budgets(db: &DatabaseConnection, ctx: &UserContext) -> Result<Vec<budget::Model>> {
    Budget::find()
        .filter(budget::Column::UserId.eq(ctx.user_id))
        .order_by_desc(budget::Column::StartDate)
        .order_by_asc(budget::Column::Category)
        .all(db)
        .await
        .map_err(Into::into)
}

/// The caller's budgets whose range contains `on`.
pub async fn active_budgets(
    db: &DatabaseConnection,
    ctx: &UserContext,
    on: NaiveDate,
) -> Result<Vec<budget::Model>> {
    Budget::find()
        .filter(budget::Column::UserId.eq(ctx.user_id))
        .filter(budget::Column::StartDate.lte(on))
        .filter(budget::Column::EndDate.gte(on))
        .order_by_asc(budget::Column::Category)
        .all(db)
        .await
        .map_err(Into::into)
}
