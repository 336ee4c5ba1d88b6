//! Report generation business logic.
//!
//! Category totals and summary statistics are computed in SQL with
//! `GROUP BY`/`SUM`/`COUNT`. Monthly totals are bucketed in memory from a
//! date-bounded query so the month arithmetic does not depend on the
//! database's date functions. Budget and goal progress are plain
//! arithmetic over the stored limits, guarded against zero targets.
//!
//! Every function is read-only and scoped to the caller's rows.

use crate::{
    config::AppConfig,
    core::auth::UserContext,
    entities::{Expense, budget, expense, goal, reminder},
    errors::Result,
};
use chrono::{Datelike, NaiveDate};
use sea_orm::{Condition, QueryOrder, QuerySelect, prelude::*};
use serde::Serialize;
use std::collections::BTreeMap;

/// Summed spend for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Category key
    pub category: String,
    /// Sum of the category's expenses
    pub total: f64,
}

/// Summed spend for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    /// Calendar year
    pub year: i32,
    /// Month, 1 through 12
    pub month: u32,
    /// Sum of the month's expenses
    pub total: f64,
}

/// Overall spend figures for a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Sum of all expenses
    pub total: f64,
    /// Number of expenses
    pub count: u64,
    /// `total / count`, or 0 when there are no expenses
    pub average: f64,
}

impl SummaryStats {
    /// Derives the average from a total and a count.
    #[must_use]
    pub fn new(total: f64, count: u64) -> Self {
        // Cast safety: expense counts stay far below 2^52.
        #[allow(clippy::cast_precision_loss)]
        let average = if count == 0 { 0.0 } else { total / count as f64 };
        Self {
            total,
            count,
            average,
        }
    }
}

/// How much of a budget has been used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    /// The budget being reported on
    pub budget: budget::Model,
    /// Spend in the budget's category and period
    pub spent: f64,
    /// `limit - spent`, never below zero
    pub remaining: f64,
    /// Share of the limit used, clamped to 0..=100
    pub progress_percent: f64,
    /// Whether spend exceeds the limit
    pub over_budget: bool,
}

impl BudgetProgress {
    /// Computes progress for `budget` given what has been spent against it.
    #[must_use]
    pub fn compute(budget: budget::Model, spent: f64) -> Self {
        let limit = budget.limit_amount;
        Self {
            remaining: (limit - spent).max(0.0),
            progress_percent: calculate_progress(spent, limit),
            over_budget: spent > limit,
            spent,
            budget,
        }
    }
}

/// How close a savings goal is to its target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    /// The goal being reported on
    pub goal: goal::Model,
    /// Share of the target saved, clamped to 0..=100
    pub progress_percent: f64,
    /// `target - current`, never below zero
    pub remaining: f64,
    /// Whether a positive target has been reached
    pub achieved: bool,
}

/// Everything the dashboard shows for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Display name of the user
    pub username: String,
    /// Overall totals
    pub stats: SummaryStats,
    /// Latest expenses, newest first
    pub recent_expenses: Vec<expense::Model>,
    /// Highest-spend categories
    pub top_categories: Vec<CategoryTotal>,
    /// Progress of budgets covering today
    pub budgets: Vec<BudgetProgress>,
    /// Progress of every goal
    pub goals: Vec<GoalProgress>,
    /// Bills due soon
    pub upcoming_reminders: Vec<reminder::Model>,
}

/// Calculates `value / target` as a percentage clamped to 0..=100.
///
/// Returns 0 when the target is zero, negative or not a number, so a
/// degenerate limit never divides by zero.
#[must_use]
pub fn calculate_progress(value: f64, target: f64) -> f64 {
    if target.is_nan() || target <= 0.0 || !value.is_finite() {
        return 0.0;
    }

    ((value / target) * 100.0).clamp(0.0, 100.0)
}

async fn grouped_category_totals(
    db: &DatabaseConnection,
    ctx: &UserContext,
    limit: Option<u64>,
) -> Result<Vec<CategoryTotal>> {
    let mut query = Expense::find()
        .select_only()
        .column(expense::Column::Category)
        .column_as(expense::Column::Amount.sum(), "total")
        .filter(expense::Column::UserId.eq(ctx.user_id))
        .group_by(expense::Column::Category)
        .order_by_desc(expense::Column::Amount.sum())
        .order_by_asc(expense::Column::Category);

    if let Some(limit) = limit {
        query = query.limit(limit);
    }

    let rows: Vec<(String, f64)> = query.into_tuple().all(db).await?;
    Ok(rows
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect())
}

/// Total spend per category across all of the caller's expenses.
///
/// Sorted by descending total; equal totals are ordered by category key.
pub async fn category_totals(db: &DatabaseConnection, ctx: &UserContext) -> Result<Vec<CategoryTotal>> {
    grouped_category_totals(db, ctx, None).await
}

/// The `n` categories with the highest spend.
pub async fn top_categories(
    db: &DatabaseConnection,
    ctx: &UserContext,
    n: u64,
) -> Result<Vec<CategoryTotal>> {
    grouped_category_totals(db, ctx, Some(n)).await
}

/// Spend per calendar month within the optional inclusive window.
///
/// Only months with at least one expense appear, oldest first.
pub async fn monthly_totals(
    db: &DatabaseConnection,
    ctx: &UserContext,
    window_start: Option<NaiveDate>,
    window_end: Option<NaiveDate>,
) -> Result<Vec<MonthlyTotal>> {
    let mut condition = Condition::all().add(expense::Column::UserId.eq(ctx.user_id));
    if let Some(start) = window_start {
        condition = condition.add(expense::Column::Date.gte(start));
    }
    if let Some(end) = window_end {
        condition = condition.add(expense::Column::Date.lte(end));
    }

    let rows: Vec<(NaiveDate, f64)> = Expense::find()
        .select_only()
        .column(expense::Column::Date)
        .column(expense::Column::Amount)
        .filter(condition)
        .into_tuple()
        .all(db)
        .await?;

    let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for (date, amount) in rows {
        *buckets.entry((date.year(), date.month())).or_insert(0.0) += amount;
    }

    Ok(buckets
        .into_iter()
        .map(|((year, month), total)| MonthlyTotal { year, month, total })
        .collect())
}

/// Total, count and average of the caller's expenses.
pub async fn summary_stats(db: &DatabaseConnection, ctx: &UserContext) -> Result<SummaryStats> {
    let row: Option<(Option<f64>, i64)> = Expense::find()
        .select_only()
        .column_as(expense::Column::Amount.sum(), "total")
        .column_as(expense::Column::Id.count(), "count")
        .filter(expense::Column::UserId.eq(ctx.user_id))
        .into_tuple()
        .one(db)
        .await?;

    let (total, count) = row.unwrap_or((None, 0));
    Ok(SummaryStats::new(total.unwrap_or(0.0), u64::try_from(count)?))
}

/// Progress of one budget against its owner's spend in the budget's
/// category and period.
///
/// The budget must already have been loaded through an owner-scoped lookup;
/// the spend query uses the budget's own `user_id`.
pub async fn budget_progress(db: &DatabaseConnection, budget: &budget::Model) -> Result<BudgetProgress> {
    let spent: Option<Option<f64>> = Expense::find()
        .select_only()
        .column_as(expense::Column::Amount.sum(), "spent")
        .filter(expense::Column::UserId.eq(budget.user_id))
        .filter(expense::Column::Category.eq(budget.category.as_str()))
        .filter(expense::Column::Date.between(budget.start_date, budget.end_date))
        .into_tuple()
        .one(db)
        .await?;

    Ok(BudgetProgress::compute(
        budget.clone(),
        spent.flatten().unwrap_or(0.0),
    ))
}

/// Progress of one of the caller's budgets, looked up by id.
pub async fn budget_progress_by_id(
    db: &DatabaseConnection,
    ctx: &UserContext,
    budget_id: i64,
) -> Result<BudgetProgress> {
    let budget = crate::core::budget::get_budget(db, ctx, budget_id).await?;
    budget_progress(db, &budget).await
}

async fn progress_for_all(db: &DatabaseConnection, budgets: &[budget::Model]) -> Result<Vec<BudgetProgress>> {
    let mut progress = Vec::with_capacity(budgets.len());
    for budget in budgets {
        progress.push(budget_progress(db, budget).await?);
    }
    Ok(progress)
}

/// Progress of every budget the caller holds.
pub async fn budget_progress_for_user(
    db: &DatabaseConnection,
    ctx: &UserContext,
) -> Result<Vec<BudgetProgress>> {
    let budgets = crate::core::budget::list_budgets(db, ctx).await?;
    progress_for_all(db, &budgets).await
}

/// Progress of the caller's budgets whose period contains `on`.
pub async fn active_budget_progress(
    db: &DatabaseConnection,
    ctx: &UserContext,
    on: NaiveDate,
) -> Result<Vec<BudgetProgress>> {
    let budgets = crate::core::budget::active_budgets(db, ctx, on).await?;
    progress_for_all(db, &budgets).await
}

/// Progress of a savings goal. A non-positive target yields 0%.
#[must_use]
pub fn goal_progress(goal: &goal::Model) -> GoalProgress {
    let target = goal.target_amount;
    let current = goal.current_amount;
    GoalProgress {
        goal: goal.clone(),
        progress_percent: calculate_progress(current, target),
        remaining: (target - current).max(0.0),
        achieved: target > 0.0 && current >= target,
    }
}

/// Progress of every goal the caller holds.
pub async fn goal_progress_for_user(db: &DatabaseConnection, ctx: &UserContext) -> Result<Vec<GoalProgress>> {
    let goals = crate::core::goal::list_goals(db, ctx).await?;
    Ok(goals.iter().map(goal_progress).collect())
}

/// Assembles the dashboard for `today`, sized by `config`.
pub async fn build_dashboard(
    db: &DatabaseConnection,
    ctx: &UserContext,
    config: &AppConfig,
    today: NaiveDate,
) -> Result<Dashboard> {
    Ok(Dashboard {
        username: ctx.username.clone(),
        stats: summary_stats(db, ctx).await?,
        recent_expenses: crate::core::expense::recent_expenses(db, ctx, config.recent_expenses_limit)
            .await?,
        top_categories: top_categories(db, ctx, config.dashboard_top_categories).await?,
        budgets: active_budget_progress(db, ctx, today).await?,
        goals: goal_progress_for_user(db, ctx).await?,
        upcoming_reminders: crate::core::reminder::upcoming_reminders(
            db,
            ctx,
            today,
            config.reminder_window_days,
        )
        .await?,
    })
}

/// Generates a progress bar string for visual representation.
///
/// Creates a text-based progress bar like: `[████████░░] 80.0%`
#[must_use]
pub fn format_progress_bar(progress_percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped_progress = progress_percent.clamp(0.0, 100.0);

    // Cast safety: clamped_progress ∈ [0, 100], length is small (10-20).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped_progress / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    format!(
        "[{}{}] {clamped_progress:.1}%",
        "█".repeat(filled),
        "░".repeat(empty)
    )
}

/// Formats a dollar amount like `$1234.50`.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::category::Category;
    use crate::test_utils::*;

    const EPSILON: f64 = 1e-9;

    fn test_budget(limit_amount: f64) -> budget::Model {
        budget::Model {
            id: 1,
            category: "food".to_string(),
            limit_amount,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 31),
            user_id: 1,
        }
    }

    fn test_goal(target_amount: f64, current_amount: f64) -> goal::Model {
        goal::Model {
            id: 1,
            name: "Savings".to_string(),
            target_amount,
            current_amount,
            due_date: date(2024, 12, 31),
            user_id: 1,
        }
    }

    #[test]
    fn test_calculate_progress() {
        assert_eq!(calculate_progress(50.0, 100.0), 50.0);
        assert_eq!(calculate_progress(100.0, 100.0), 100.0);
        assert_eq!(calculate_progress(250.0, 100.0), 100.0);
        assert_eq!(calculate_progress(-10.0, 100.0), 0.0);
        assert_eq!(calculate_progress(50.0, 0.0), 0.0);
        assert_eq!(calculate_progress(50.0, -20.0), 0.0);
        assert_eq!(calculate_progress(50.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_summary_stats_average() {
        let empty = SummaryStats::new(0.0, 0);
        assert_eq!(empty.average, 0.0);

        let stats = SummaryStats::new(180.0, 3);
        assert_eq!(stats.average, 60.0);
        assert!((stats.average * 3.0 - stats.total).abs() < EPSILON);
    }

    #[test]
    fn test_budget_progress_exactly_at_limit() {
        let progress = BudgetProgress::compute(test_budget(100.0), 100.0);
        assert_eq!(progress.spent, 100.0);
        assert_eq!(progress.remaining, 0.0);
        assert_eq!(progress.progress_percent, 100.0);
        assert!(!progress.over_budget);
    }

    #[test]
    fn test_budget_progress_over_limit_is_clamped() {
        let progress = BudgetProgress::compute(test_budget(100.0), 130.0);
        assert_eq!(progress.remaining, 0.0);
        assert_eq!(progress.progress_percent, 100.0);
        assert!(progress.over_budget);
    }

    #[test]
    fn test_budget_progress_bounds_hold() {
        for limit in [0.0, 0.01, 50.0, 100.0, 1_000.0] {
            for spent in [0.0, 0.5, 49.99, 100.0, 5_000.0] {
                let progress = BudgetProgress::compute(test_budget(limit), spent);
                assert!(progress.remaining >= 0.0);
                assert!((0.0..=100.0).contains(&progress.progress_percent));
            }
        }
    }

    #[test]
    fn test_goal_progress_zero_target_is_guarded() {
        let progress = goal_progress(&test_goal(0.0, 50.0));
        assert_eq!(progress.progress_percent, 0.0);
        assert_eq!(progress.remaining, 0.0);
        assert!(!progress.achieved);

        let negative = goal_progress(&test_goal(-10.0, 5.0));
        assert_eq!(negative.progress_percent, 0.0);
    }

    #[test]
    fn test_goal_progress() {
        let halfway = goal_progress(&test_goal(400.0, 100.0));
        assert_eq!(halfway.progress_percent, 25.0);
        assert_eq!(halfway.remaining, 300.0);
        assert!(!halfway.achieved);

        let beyond = goal_progress(&test_goal(400.0, 500.0));
        assert_eq!(beyond.progress_percent, 100.0);
        assert_eq!(beyond.remaining, 0.0);
        assert!(beyond.achieved);
    }

    #[test]
    fn test_format_progress_bar() {
        assert_eq!(format_progress_bar(100.0, Some(10)), "[██████████] 100.0%");
        assert_eq!(format_progress_bar(50.0, Some(10)), "[█████░░░░░] 50.0%");
        assert_eq!(format_progress_bar(0.0, None), "[░░░░░░░░░░] 0.0%");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.5), "$12.50");
        assert_eq!(format_amount(0.0), "$0.00");
    }

    #[tokio::test]
    async fn test_scenario_category_and_monthly_totals() -> Result<()> {
        let (db, ctx) = setup_with_scenario_expenses().await?;

        let by_category = category_totals(&db, &ctx).await?;
        assert_eq!(
            by_category,
            vec![
                CategoryTotal {
                    category: "food".to_string(),
                    total: 150.0
                },
                CategoryTotal {
                    category: "transport".to_string(),
                    total: 30.0
                },
            ]
        );

        let by_month = monthly_totals(&db, &ctx, None, None).await?;
        assert_eq!(
            by_month,
            vec![
                MonthlyTotal {
                    year: 2024,
                    month: 1,
                    total: 130.0
                },
                MonthlyTotal {
                    year: 2024,
                    month: 2,
                    total: 50.0
                },
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_category_sum_matches_monthly_sum() -> Result<()> {
        let (db, ctx) = setup_with_user().await?;
        let amounts = [12.34, 0.01, 99.99, 45.5, 7.25, 1_000.0, 3.3];
        let categories = [Category::Food, Category::Travel, Category::Utilities];
        for (i, amount) in amounts.iter().enumerate() {
            let month = u32::try_from(i % 12).unwrap() + 1;
            create_test_expense(&db, &ctx, *amount, categories[i % 3], date(2023, month, 15)).await?;
        }

        let category_sum: f64 = category_totals(&db, &ctx).await?.iter().map(|c| c.total).sum();
        let monthly_sum: f64 = monthly_totals(&db, &ctx, None, None)
            .await?
            .iter()
            .map(|m| m.total)
            .sum();
        let stats = summary_stats(&db, &ctx).await?;

        assert!((category_sum - monthly_sum).abs() < 1e-6);
        assert!((category_sum - stats.total).abs() < 1e-6);
        assert_eq!(stats.count, 7);
        assert!((stats.average * 7.0 - stats.total).abs() < 1e-6);
        Ok(())
    }

    #[tokio::test]
    async fn test_monthly_totals_window() -> Result<()> {
        let (db, ctx) = setup_with_scenario_expenses().await?;
        create_test_expense(&db, &ctx, 20.0, Category::Other, date(2023, 12, 31)).await?;

        let january = monthly_totals(&db, &ctx, Some(date(2024, 1, 1)), Some(date(2024, 1, 31))).await?;
        assert_eq!(january.len(), 1);
        assert_eq!(january[0].total, 130.0);

        let from_2024 = monthly_totals(&db, &ctx, Some(date(2024, 1, 1)), None).await?;
        assert_eq!(from_2024.len(), 2);

        let all = monthly_totals(&db, &ctx, None, None).await?;
        assert_eq!((all[0].year, all[0].month), (2023, 12));
        Ok(())
    }

    #[tokio::test]
    async fn test_top_categories_truncates_and_breaks_ties() -> Result<()> {
        let (db, ctx) = setup_with_user().await?;
        let day = date(2024, 4, 1);
        create_test_expense(&db, &ctx, 40.0, Category::Travel, day).await?;
        create_test_expense(&db, &ctx, 40.0, Category::Education, day).await?;
        create_test_expense(&db, &ctx, 90.0, Category::Food, day).await?;
        create_test_expense(&db, &ctx, 5.0, Category::Other, day).await?;

        let top = top_categories(&db, &ctx, 3).await?;
        let keys: Vec<_> = top.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(keys, ["food", "education", "travel"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_summary_stats_empty() -> Result<()> {
        let (db, ctx) = setup_with_user().await?;
        let stats = summary_stats(&db, &ctx).await?;
        assert_eq!(stats, SummaryStats::new(0.0, 0));
        assert!(category_totals(&db, &ctx).await?.is_empty());
        assert!(monthly_totals(&db, &ctx, None, None).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_aggregates_ignore_other_users() -> Result<()> {
        let (db, alice) = setup_with_scenario_expenses().await?;
        let bob = create_test_user(&db, "bob").await?;
        create_test_expense(&db, &bob, 1_000.0, Category::Food, date(2024, 1, 6)).await?;

        let stats = summary_stats(&db, &alice).await?;
        assert_eq!(stats.total, 180.0);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.average, 60.0);

        let food = &category_totals(&db, &alice).await?[0];
        assert_eq!(food.total, 150.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_scenario_budget_progress() -> Result<()> {
        let (db, ctx) = setup_with_scenario_expenses().await?;
        let budget = create_test_budget(
            &db,
            &ctx,
            Category::Food,
            100.0,
            date(2024, 1, 1),
            date(2024, 1, 31),
        )
        .await?;

        let progress = budget_progress(&db, &budget).await?;
        assert_eq!(progress.spent, 100.0);
        assert_eq!(progress.remaining, 0.0);
        assert_eq!(progress.progress_percent, 100.0);
        assert!(!progress.over_budget);

        assert_eq!(budget_progress_by_id(&db, &ctx, budget.id).await?, progress);
        Ok(())
    }

    #[tokio::test]
    async fn test_budget_progress_range_is_inclusive() -> Result<()> {
        let (db, ctx) = setup_with_user().await?;
        create_test_expense(&db, &ctx, 10.0, Category::Food, date(2024, 3, 1)).await?;
        create_test_expense(&db, &ctx, 20.0, Category::Food, date(2024, 3, 31)).await?;
        create_test_expense(&db, &ctx, 40.0, Category::Food, date(2024, 4, 1)).await?;
        create_test_expense(&db, &ctx, 80.0, Category::Shopping, date(2024, 3, 15)).await?;

        let budget = create_test_budget(&db, &ctx, Category::Food, 20.0, date(2024, 3, 1), date(2024, 3, 31)).await?;
        let progress = budget_progress(&db, &budget).await?;
        assert_eq!(progress.spent, 30.0);
        assert!(progress.over_budget);
        assert_eq!(progress.progress_percent, 100.0);

        let empty = create_test_budget(&db, &ctx, Category::Travel, 50.0, date(2024, 3, 1), date(2024, 3, 31)).await?;
        let untouched = budget_progress(&db, &empty).await?;
        assert_eq!(untouched.spent, 0.0);
        assert_eq!(untouched.remaining, 50.0);
        Ok(())
    }

    #[tokio::test]
    async fn test_budget_progress_by_id_is_owner_scoped() -> Result<()> {
        let (db, alice) = setup_with_user().await?;
        let bob = create_test_user(&db, "bob").await?;
        let bobs = create_test_budget(&db, &bob, Category::Food, 10.0, date(2024, 1, 1), date(2024, 1, 2)).await?;

        assert!(budget_progress_by_id(&db, &alice, bobs.id).await.is_err());
        assert!(budget_progress_for_user(&db, &alice).await?.is_empty());
        assert_eq!(budget_progress_for_user(&db, &bob).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_build_dashboard() -> Result<()> {
        let (db, ctx) = setup_with_scenario_expenses().await?;
        let today = date(2024, 2, 12);
        create_test_budget(&db, &ctx, Category::Food, 200.0, date(2024, 2, 1), date(2024, 2, 29)).await?;
        create_test_budget(&db, &ctx, Category::Food, 100.0, date(2024, 1, 1), date(2024, 1, 31)).await?;
        create_test_goal(&db, &ctx, "Laptop", 1_000.0, 250.0, date(2024, 8, 1)).await?;
        create_test_reminder(&db, &ctx, "Internet", date(2024, 2, 15)).await?;
        create_test_reminder(&db, &ctx, "Insurance", date(2024, 3, 30)).await?;

        let config = AppConfig {
            recent_expenses_limit: 2,
            dashboard_top_categories: 1,
            ..AppConfig::default()
        };
        let dashboard = build_dashboard(&db, &ctx, &config, today).await?;

        assert_eq!(dashboard.username, "alice");
        assert_eq!(dashboard.stats.total, 180.0);
        assert_eq!(dashboard.recent_expenses.len(), 2);
        assert_eq!(dashboard.recent_expenses[0].date, date(2024, 2, 10));
        assert_eq!(dashboard.top_categories.len(), 1);
        assert_eq!(dashboard.top_categories[0].category, "food");

        assert_eq!(dashboard.budgets.len(), 1);
        assert_eq!(dashboard.budgets[0].spent, 50.0);
        assert_eq!(dashboard.budgets[0].progress_percent, 25.0);

        assert_eq!(dashboard.goals.len(), 1);
        assert_eq!(dashboard.goals[0].progress_percent, 25.0);

        assert_eq!(dashboard.upcoming_reminders.len(), 1);
        assert_eq!(dashboard.upcoming_reminders[0].bill_name, "Internet");
        Ok(())
    }
}
