//! Goal store - savings targets and contributions toward them.

use crate::{
    core::{
        auth::UserContext,
        validation::{require_non_negative_amount, require_positive_amount, require_text},
    },
    entities::{Goal, goal},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*, sea_query::Expr};
use tracing::{debug, info, instrument};

const MAX_GOAL_NAME_LEN: usize = 100;

/// Fields of a goal as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalInput {
    /// Goal name, 1 to 100 characters
    pub name: String,
    /// Amount to reach, must be positive
    pub target_amount: f64,
    /// Amount already saved, zero or more
    pub current_amount: f64,
    /// Day the target should be reached
    pub due_date: NaiveDate,
}

impl GoalInput {
    fn validate(&self) -> Result<String> {
        require_positive_amount(self.target_amount)?;
        require_non_negative_amount(self.current_amount)?;
        require_text("goal name", &self.name, 1, MAX_GOAL_NAME_LEN)
    }
}

async fn find_owned<C>(db: &C, ctx: &UserContext, goal_id: i64) -> Result<goal::Model>
where
    C: ConnectionTrait,
{
    Goal::find_by_id(goal_id)
        .filter(goal::Column::UserId.eq(ctx.user_id))
        .one(db)
        .await?
        .ok_or(Error::NotAuthorizedOrNotFound {
            entity: "goal",
            id: goal_id,
        })
}

/// Creates a savings goal for the caller.
#[instrument(skip(db, ctx, input), fields(user_id = ctx.user_id))]
pub async fn create_goal(db: &DatabaseConnection, ctx: &UserContext, input: GoalInput) -> Result<goal::Model> {
    let name = input.validate()?;

    let created = goal::ActiveModel {
        name: Set(name),
        target_amount: Set(input.target_amount),
        current_amount: Set(input.current_amount),
        due_date: Set(input.due_date),
        user_id: Set(ctx.user_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    debug!(goal_id = created.id, "Created goal");
    Ok(created)
}

/// Fetches one of the caller's goals.
pub async fn get_goal(db: &DatabaseConnection, ctx: &UserContext, goal_id: i64) -> Result<goal::Model> {
    find_owned(db, ctx, goal_id).await
}

/// Replaces the fields of one of the caller's goals.
#[instrument(skip(db, ctx, input), fields(user_id = ctx.user_id))]
pub async fn update_goal(
    db: &DatabaseConnection,
    ctx: &UserContext,
    goal_id: i64,
    input: GoalInput,
) -> Result<goal::Model> {
    let name = input.validate()?;

    let txn = db.begin().await?;
    let existing = find_owned(&txn, ctx, goal_id).await?;

    let mut active_model: goal::ActiveModel = existing.into();
    active_model.name = Set(name);
    active_model.target_amount = Set(input.target_amount);
    active_model.current_amount = Set(input.current_amount);
    active_model.due_date = Set(input.due_date);
    let updated = active_model.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Deletes one of the caller's goals.
#[instrument(skip(db, ctx), fields(user_id = ctx.user_id))]
pub async fn delete_goal(db: &DatabaseConnection, ctx: &UserContext, goal_id: i64) -> Result<()> {
    let result = Goal::delete_many()
        .filter(goal::Column::Id.eq(goal_id))
        .filter(goal::Column::UserId.eq(ctx.user_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotAuthorizedOrNotFound {
            entity: "goal",
            id: goal_id,
        });
    }
    info!(goal_id, "Deleted goal");
    Ok(())
}

/// All of the caller's goals, nearest due date first.
pub async fn list_goals(db: &DatabaseConnection, ctx: &UserContext) -> Result<Vec<goal::Model>> {
    Goal::find()
        .filter(goal::Column::UserId.eq(ctx.user_id))
        .order_by_asc(goal::Column::DueDate)
        .order_by_asc(goal::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Adds `amount` to a goal's saved amount.
///
/// Uses a single `UPDATE goals SET current_amount = current_amount + ?` so
/// concurrent contributions are not lost.
#[instrument(skip(db, ctx), fields(user_id = ctx.user_id))]
pub async fn contribute_to_goal(
    db: &DatabaseConnection,
    ctx: &UserContext,
    goal_id: i64,
    amount: f64,
) -> Result<goal::Model> {
    require_positive_amount(amount)?;

    let txn = db.begin().await?;

    let result = Goal::update_many()
        .col_expr(
            goal::Column::CurrentAmount,
            Expr::col(goal::Column::CurrentAmount).add(amount),
        )
        .filter(goal::Column::Id.eq(goal_id))
        .filter(goal::Column::UserId.eq(ctx.user_id))
        .exec(&txn)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotAuthorizedOrNotFound {
            entity: "goal",
            id: goal_id,
        });
    }

    let updated = find_owned(&txn, ctx, goal_id).await?;
    txn.commit().await?;

    info!(goal_id, amount, current = updated.current_amount, "Recorded contribution");
    Ok(updated)
}
