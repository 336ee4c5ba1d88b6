//! Expense store - owner-scoped CRUD and listing for expenses.
//!
//! Every function takes the caller's [`UserContext`] and constrains its query
//! by `user_id`. A row that exists but belongs to someone else is reported
//! exactly like a missing row, as [`Error::NotAuthorizedOrNotFound`].

use crate::{
    core::{
        auth::UserContext,
        category::Category,
        filter::ExpenseFilter,
        pagination::{Page, normalize_page},
        validation::{optional_text, require_positive_amount},
    },
    entities::{Expense, expense},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{ItemsAndPagesNumber, QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*};
use tracing::{debug, info, instrument};

const MAX_DESCRIPTION_LEN: usize = 255;

/// Largest page size [`list_expenses`] will use.
pub const MAX_PAGE_SIZE: u64 = 1_000;

/// Fields of an expense as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseInput {
    /// Amount spent, must be positive
    pub amount: f64,
    /// Category
    pub category: Category,
    /// Day of the expense
    pub date: NaiveDate,
    /// Optional note, at most 255 characters
    pub description: Option<String>,
}

impl ExpenseInput {
    fn validate(&self) -> Result<Option<String>> {
        require_positive_amount(self.amount)?;
        optional_text("description", self.description.as_deref(), MAX_DESCRIPTION_LEN)
    }
}

async fn find_owned<C>(db: &C, ctx: &UserContext, expense_id: i64) -> Result<expense::Model>
where
    C: ConnectionTrait,
{
    Expense::find_by_id(expense_id)
        .filter(expense::Column::UserId.eq(ctx.user_id))
        .one(db)
        .await?
        .ok_or(Error::NotAuthorizedOrNotFound {
            entity: "expense",
            id: expense_id,
        })
}

/// Records a new expense for the caller.
#[instrument(skip(db, ctx, input), fields(user_id = ctx.user_id))]
pub async fn create_expense(
    db: &DatabaseConnection,
    ctx: &UserContext,
    input: ExpenseInput,
) -> Result<expense::Model> {
    let description = input.validate()?;

    let created = expense::ActiveModel {
        amount: Set(input.amount),
        category: Set(input.category.key().to_string()),
        date: Set(input.date),
        description: Set(description),
        user_id: Set(ctx.user_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    debug!(expense_id = created.id, "Created expense");
    Ok(created)
}

/// Fetches one of the caller's expenses.
pub async fn get_expense(
    db: &DatabaseConnection,
    ctx: &UserContext,
    expense_id: i64,
) -> Result<expense::Model> {
    find_owned(db, ctx, expense_id).await
}

/// Replaces every editable field of one of the caller's expenses.
#[instrument(skip(db, ctx, input), fields(user_id = ctx.user_id))]
pub async fn update_expense(
    db: &DatabaseConnection,
    ctx: &UserContext,
    expense_id: i64,
    input: ExpenseInput,
) -> Result<expense::Model> {
    let description = input.validate()?;

    let txn = db.begin().await?;
    let existing = find_owned(&txn, ctx, expense_id).await?;

    let mut active_model: expense::ActiveModel = existing.into();
    active_model.amount = Set(input.amount);
    active_model.category = Set(input.category.key().to_string());
    active_model.date = Set(input.date);
    active_model.description = Set(description);
    let updated = active_model.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Deletes one of the caller's expenses.
#[instrument(skip(db, ctx), fields(user_id = ctx.user_id))]
pub async fn delete_expense(db: &DatabaseConnection, ctx: &UserContext, expense_id: i64) -> Result<()> {
    let result = Expense::delete_many()
        .filter(expense::Column::Id.eq(expense_id))
        .filter(expense::Column::UserId.eq(ctx.user_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotAuthorizedOrNotFound {
            entity: "expense",
            id: expense_id,
        });
    }
    info!(expense_id, "Deleted expense");
    Ok(())
}

/// Lists the caller's expenses matching `filter`, newest first, one page at a time.
///
/// Page numbers start at 1; 0 is treated as 1. A page past the end is empty
/// and never reaches the database. Page sizes are capped at
/// [`MAX_PAGE_SIZE`].
pub async fn list_expenses(
    db: &DatabaseConnection,
    ctx: &UserContext,
    filter: &ExpenseFilter,
    page: u64,
    per_page: u64,
) -> Result<Page<expense::Model>> {
    let page = normalize_page(page);
    let per_page = per_page.clamp(1, MAX_PAGE_SIZE);

    let paginator = Expense::find()
        .filter(filter.condition(ctx))
        .order_by_desc(expense::Column::Date)
        .order_by_desc(expense::Column::Id)
        .paginate(db, per_page);

    let ItemsAndPagesNumber {
        number_of_items,
        number_of_pages,
    } = paginator.num_items_and_pages().await?;
    let items = if page > number_of_pages {
        Vec::new()
    } else {
        paginator.fetch_page(page - 1).await?
    };

    Ok(Page {
        items,
        page,
        per_page,
        total_items: number_of_items,
        total_pages: number_of_pages,
    })
}

/// Every expense of the caller matching `filter`, newest first.
pub async fn find_expenses(
    db: &DatabaseConnection,
    ctx: &UserContext,
    filter: &ExpenseFilter,
) -> Result<Vec<expense::Model>> {
    Expense::find()
        .filter(filter.condition(ctx))
        .order_by_desc(expense::Column::Date)
        .order_by_desc(expense::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// The caller's `limit` most recent expenses.
pub async fn recent_expenses(
    db: &DatabaseConnection,
    ctx: &UserContext,
    limit: u64,
) -> Result<Vec<expense::Model>> {
    Expense::find()
        .filter(expense::Column::UserId.eq(ctx.user_id))
        .order_by_desc(expense::Column::Date)
        .order_by_desc(expense::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}
