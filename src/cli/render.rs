//! Plain-text rendering of store and report results.

use crate::{
    core::{
        category::Category,
        export::capitalize,
        pagination::Page,
        report::{
            BudgetProgress, CategoryTotal, Dashboard, GoalProgress, MonthlyTotal, format_amount,
            format_progress_bar,
        },
    },
    entities::{expense, reminder},
};

fn category_label(key: &str) -> String {
    key.parse::<Category>()
        .map_or_else(|_| capitalize(key), |category| category.label().to_string())
}

/// One line per expense: id, date, category, amount and note.
#[must_use]
pub fn expense_line(row: &expense::Model) -> String {
    let note = row
        .description
        .as_deref()
        .map(|text| format!(" | {text}"))
        .unwrap_or_default();
    format!(
        "#{} {} {} {}{note}",
        row.id,
        row.date,
        category_label(&row.category),
        format_amount(row.amount)
    )
}

/// An expense page with a position footer.
#[must_use]
pub fn expense_page(page: &Page<expense::Model>) -> String {
    if page.items.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut lines: Vec<String> = page.items.iter().map(expense_line).collect();
    lines.push(format!(
        "Page {} of {} ({} expenses)",
        page.page, page.total_pages, page.total_items
    ));
    lines.join("\n")
}

/// One line per budget with a progress bar.
#[must_use]
pub fn budget_lines(progress: &[BudgetProgress]) -> String {
    if progress.is_empty() {
        return "No budgets set.".to_string();
    }

    progress
        .iter()
        .map(|entry| {
            let flag = if entry.over_budget { " OVER BUDGET" } else { "" };
            format!(
                "#{} {} {}..{} {} spent of {} ({} left) {}{flag}",
                entry.budget.id,
                category_label(&entry.budget.category),
                entry.budget.start_date,
                entry.budget.end_date,
                format_amount(entry.spent),
                format_amount(entry.budget.limit_amount),
                format_amount(entry.remaining),
                format_progress_bar(entry.progress_percent, None),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per goal with a progress bar.
#[must_use]
pub fn goal_lines(progress: &[GoalProgress]) -> String {
    if progress.is_empty() {
        return "No goals yet.".to_string();
    }

    progress
        .iter()
        .map(|entry| {
            let flag = if entry.achieved { " reached" } else { "" };
            format!(
                "#{} {} {} of {} by {} {}{flag}",
                entry.goal.id,
                entry.goal.name,
                format_amount(entry.goal.current_amount),
                format_amount(entry.goal.target_amount),
                entry.goal.due_date,
                format_progress_bar(entry.progress_percent, None),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per reminder.
#[must_use]
pub fn reminder_lines(reminders: &[reminder::Model]) -> String {
    if reminders.is_empty() {
        return "No reminders.".to_string();
    }

    reminders
        .iter()
        .map(|bill| {
            format!(
                "#{} {} due {} {}",
                bill.id,
                bill.bill_name,
                bill.due_date,
                format_amount(bill.amount)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Category ranking followed by month-by-month totals.
#[must_use]
pub fn spending_report(by_category: &[CategoryTotal], by_month: &[MonthlyTotal]) -> String {
    if by_category.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let mut lines = vec!["By category:".to_string()];
    lines.extend(by_category.iter().map(|total| {
        format!("  {:<20} {}", category_label(&total.category), format_amount(total.total))
    }));

    lines.push(String::new());
    lines.push("By month:".to_string());
    if by_month.is_empty() {
        lines.push("  nothing in range".to_string());
    }
    lines.extend(
        by_month
            .iter()
            .map(|month| format!("  {}-{:02} {}", month.year, month.month, format_amount(month.total))),
    );
    lines.join("\n")
}

/// The full dashboard.
#[must_use]
pub fn dashboard(view: &Dashboard) -> String {
    let mut lines = vec![
        format!("Dashboard for {}", view.username),
        format!(
            "Total spent: {} across {} expenses (average {})",
            format_amount(view.stats.total),
            view.stats.count,
            format_amount(view.stats.average)
        ),
        String::new(),
        "Top categories:".to_string(),
    ];

    if view.top_categories.is_empty() {
        lines.push("  none yet".to_string());
    }
    for total in &view.top_categories {
        lines.push(format!(
            "  {} {}",
            category_label(&total.category),
            format_amount(total.total)
        ));
    }

    lines.push(String::new());
    lines.push("Recent expenses:".to_string());
    if view.recent_expenses.is_empty() {
        lines.push("  none yet".to_string());
    }
    for row in &view.recent_expenses {
        lines.push(format!("  {}", expense_line(row)));
    }

    for (title, body) in [
        ("Budgets:", budget_lines(&view.budgets)),
        ("Goals:", goal_lines(&view.goals)),
        ("Upcoming bills:", reminder_lines(&view.upcoming_reminders)),
    ] {
        lines.push(String::new());
        lines.push(title.to_string());
        lines.extend(body.lines().map(|line| format!("  {line}")));
    }

    lines.join("\n")
}
