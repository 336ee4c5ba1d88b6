//! Reminder store - bills the user wants to be warned about.

use crate::{
    core::{
        auth::UserContext,
        validation::{require_positive_amount, require_text},
    },
    entities::{Reminder, reminder},
    errors::{Error, Result},
};
use chrono::{Days, NaiveDate};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{debug, info, instrument};

const MAX_BILL_NAME_LEN: usize = 100;

/// Fields of a reminder as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderInput {
    /// Bill name, 1 to 100 characters
    pub bill_name: String,
    /// Day the bill is due
    pub due_date: NaiveDate,
    /// Amount due, must be positive
    pub amount: f64,
}

impl ReminderInput {
    fn validate(&self) -> Result<String> {
        require_positive_amount(self.amount)?;
        require_text("bill name", &self.bill_name, 1, MAX_BILL_NAME_LEN)
    }
}

async fn find_owned<C>(db: &C, ctx: &UserContext, reminder_id: i64) -> Result<reminder::Model>
where
    C: ConnectionTrait,
{
    Reminder::find_by_id(reminder_id)
        .filter(reminder::Column::UserId.eq(ctx.user_id))
        .one(db)
        .await?
        .ok_or(Error::NotAuthorizedOrNotFound {
            entity: "reminder",
            id: reminder_id,
        })
}

/// Creates a bill reminder for the caller.
#[instrument(skip(db, ctx, input), fields(user_id = ctx.user_id))]
pub async fn create_reminder(
    db: &DatabaseConnection,
    ctx: &UserContext,
    input: ReminderInput,
) -> Result<reminder::Model> {
    let bill_name = input.validate()?;

    let created = reminder::ActiveModel {
        bill_name: Set(bill_name),
        due_date: Set(input.due_date),
        amount: Set(input.amount),
        user_id: Set(ctx.user_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    debug!(reminder_id = created.id, "Created reminder");
    Ok(created)
}

/// Fetches one of the caller's reminders.
pub async fn get_reminder(
    db: &DatabaseConnection,
    ctx: &UserContext,
    reminder_id: i64,
) -> Result<reminder::Model> {
    find_owned(db, ctx, reminder_id).await
}

/// Replaces the fields of one of the caller's reminders.
#[instrument(skip(db, ctx, input), fields(user_id = ctx.user_id))]
pub async fn update_reminder(
    db: &DatabaseConnection,
    ctx: &UserContext,
    reminder_id: i64,
    input: ReminderInput,
) -> Result<reminder::Model> {
    let bill_name = input.validate()?;

    let txn = db.begin().await?;
    let existing = find_owned(&txn, ctx, reminder_id).await?;

    let mut active_model: reminder::ActiveModel = existing.into();
    active_model.bill_name = Set(bill_name);
    active_model.due_date = Set(input.due_date);
    active_model.amount = Set(input.amount);
    let updated = active_model.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Deletes one of the caller's reminders.
#[instrument(skip(db, ctx), fields(user_id = ctx.user_id))]
pub async fn delete_reminder(db: &DatabaseConnection, ctx: &UserContext, reminder_id: i64) -> Result<()> {
    let result = Reminder::delete_many()
        .filter(reminder::Column::Id.eq(reminder_id))
        .filter(reminder::Column::UserId.eq(ctx.user_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::NotAuthorizedOrNotFound {
            entity: "reminder",
            id: reminder_id,
        });
    }
    info!(reminder_id, "Deleted reminder");
    Ok(())
}

/// All of the caller's reminders, soonest due first.
pub async fn list_reminders(db: &DatabaseConnection, ctx: &UserContext) -> Result<Vec<reminder::Model>> {
    Reminder::find()
        .filter(reminder::Column::UserId.eq(ctx.user_id))
        .order_by_asc(reminder::Column::DueDate)
        .order_by_asc(reminder::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Reminders due between `today` and `today + days`, both inclusive.
pub async fn upcoming_reminders(
    db: &DatabaseConnection,
    ctx: &UserContext,
    today: NaiveDate,
    days: u64,
) -> Result<Vec<reminder::Model>> {
    let until = today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);

    Reminder::find()
        .filter(reminder::Column::UserId.eq(ctx.user_id))
        .filter(reminder::Column::DueDate.between(today, until))
        .order_by_asc(reminder::Column::DueDate)
        .order_by_asc(reminder::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Reminders whose due date is already behind `today`.
pub async fn overdue_reminders(
    db: &DatabaseConnection,
    ctx: &UserContext,
    today: NaiveDate,
) -> Result<Vec<reminder::Model>> {
    Reminder::find()
        .filter(reminder::Column::UserId.eq(ctx.user_id))
        .filter(reminder::Column::DueDate.lt(today))
        .order_by_asc(reminder::Column::DueDate)
        .all(db)
        .await
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_create_reminder_validation() -> Result<()> {
        let (db, ctx) = setup_with_user().await?;

        let no_name = ReminderInput {
            bill_name: "  ".to_string(),
            due_date: date(2024, 1, 1),
            amount: 10.0,
        };
        assert!(matches!(
            create_reminder(&db, &ctx, no_name).await,
            Err(Error::InvalidInput { .. })
        ));

        let free = ReminderInput {
            bill_name: "Gym".to_string(),
            due_date: date(2024, 1, 1),
            amount: 0.0,
        };
        assert!(matches!(
            create_reminder(&db, &ctx, free).await,
            Err(Error::InvalidAmount { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_reminder_crud() -> Result<()> {
        let (db, ctx) = setup_with_user().await?;
        let created = create_test_reminder(&db, &ctx, " Electricity ", date(2024, 6, 15)).await?;
        assert_eq!(created.bill_name, "Electricity");

        let updated = update_reminder(
            &db,
            &ctx,
            created.id,
            ReminderInput {
                bill_name: "Power".to_string(),
                due_date: date(2024, 6, 20),
                amount: 75.5,
            },
        )
        .await?;
        assert_eq!(updated.bill_name, "Power");
        assert_eq!(updated.amount, 75.5);
        assert_eq!(get_reminder(&db, &ctx, created.id).await?, updated);

        delete_reminder(&db, &ctx, created.id).await?;
        assert!(list_reminders(&db, &ctx).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_upcoming_and_overdue() -> Result<()> {
        let (db, ctx) = setup_with_user().await?;
        let bob = create_test_user(&db, "bob").await?;
        let today = date(2024, 6, 10);

        create_test_reminder(&db, &ctx, "Water", date(2024, 6, 9)).await?;
        create_test_reminder(&db, &ctx, "Rent", date(2024, 6, 10)).await?;
        create_test_reminder(&db, &ctx, "Phone", date(2024, 6, 17)).await?;
        create_test_reminder(&db, &ctx, "Insurance", date(2024, 6, 18)).await?;
        create_test_reminder(&db, &bob, "Bob's rent", date(2024, 6, 11)).await?;

        let upcoming = upcoming_reminders(&db, &ctx, today, 7).await?;
        let names: Vec<_> = upcoming.iter().map(|r| r.bill_name.as_str()).collect();
        assert_eq!(names, ["Rent", "Phone"]);

        let overdue = overdue_reminders(&db, &ctx, today).await?;
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].bill_name, "Water");

        let all = list_reminders(&db, &ctx).await?;
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].bill_name, "Water");
        Ok(())
    }

    #[tokio::test]
    async fn test_reminders_are_owner_scoped() -> Result<()> {
        let (db, alice) = setup_with_user().await?;
        let bob = create_test_user(&db, "bob").await?;
        let bobs = create_test_reminder(&db, &bob, "Rent", date(2024, 1, 1)).await?;

        assert!(matches!(
            get_reminder(&db, &alice, bobs.id).await,
            Err(Error::NotAuthorizedOrNotFound { entity: "reminder", .. })
        ));
        assert!(delete_reminder(&db, &alice, bobs.id).await.is_err());
        assert_eq!(list_reminders(&db, &bob).await?.len(), 1);
        Ok(())
    }
}
