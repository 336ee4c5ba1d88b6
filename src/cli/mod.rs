//! Command line front end.
//!
//! Parsing is done by clap; [`run`] authenticates where needed, calls into
//! [`crate::core`] with the resulting [`UserContext`] and returns the text to
//! print. Nothing here touches the database directly.

pub mod render;

use crate::{
    config::AppConfig,
    core::{
        auth::{self, NewUser, UserContext},
        budget::{self, BudgetInput},
        category::Category,
        expense::{self, ExpenseInput},
        export,
        filter::{ExpenseFilter, FilterParams, parse_page},
        goal::{self, GoalInput},
        reminder::{self, ReminderInput},
        report::{self, format_amount},
    },
    errors::Result,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use sea_orm::DatabaseConnection;
use std::{fs::File, io::BufWriter, path::PathBuf};
use tracing::info;

/// Personal finance tracker: expenses, budgets, bills and savings goals
#[derive(Debug, Parser)]
#[command(name = "finance-tracker", version, about)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Login for commands that act on a user's data.
#[derive(Debug, Clone, Args)]
pub struct Credentials {
    /// Account email
    #[arg(long, env = "FINANCE_EMAIL")]
    pub email: String,
    /// Account password
    #[arg(long, env = "FINANCE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Expense filters. Values that do not parse are ignored.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Category key, e.g. `food`
    #[arg(long)]
    pub category: Option<String>,
    /// Earliest date, YYYY-MM-DD
    #[arg(long)]
    pub date_from: Option<String>,
    /// Latest date, YYYY-MM-DD
    #[arg(long)]
    pub date_to: Option<String>,
    /// Smallest amount
    #[arg(long)]
    pub min_amount: Option<String>,
    /// Largest amount
    #[arg(long)]
    pub max_amount: Option<String>,
    /// Text the description must contain
    #[arg(long)]
    pub search: Option<String>,
}

impl From<&FilterArgs> for FilterParams {
    fn from(args: &FilterArgs) -> Self {
        Self {
            category: args.category.clone(),
            date_from: args.date_from.clone(),
            date_to: args.date_to.clone(),
            min_amount: args.min_amount.clone(),
            max_amount: args.max_amount.clone(),
            search: args.search.clone(),
            page: None,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the database schema
    Init,

    /// Create an account
    Register {
        /// Display name, 3 to 64 characters
        #[arg(long)]
        username: String,
        /// Login email
        #[arg(long)]
        email: String,
        /// Password, at least 6 characters
        #[arg(long, env = "FINANCE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Record an expense
    AddExpense {
        #[command(flatten)]
        auth: Credentials,
        /// Amount spent
        #[arg(long)]
        amount: f64,
        /// Category key
        #[arg(long)]
        category: Category,
        /// Day of the expense, defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Free text note
        #[arg(long)]
        description: Option<String>,
    },

    /// List expenses, newest first
    Expenses {
        #[command(flatten)]
        auth: Credentials,
        #[command(flatten)]
        filter: FilterArgs,
        /// Page number, starting at 1
        #[arg(long)]
        page: Option<String>,
    },

    /// Change fields of an expense; omitted fields keep their value
    EditExpense {
        #[command(flatten)]
        auth: Credentials,
        /// Expense id
        id: i64,
        /// New amount
        #[arg(long)]
        amount: Option<f64>,
        /// New category key
        #[arg(long)]
        category: Option<Category>,
        /// New date
        #[arg(long)]
        date: Option<NaiveDate>,
        /// New note
        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,
        /// Remove the note
        #[arg(long)]
        clear_description: bool,
    },

    /// Delete an expense
    DeleteExpense {
        #[command(flatten)]
        auth: Credentials,
        /// Expense id
        id: i64,
    },

    /// Set a spending limit for a category over a date range
    SetBudget {
        #[command(flatten)]
        auth: Credentials,
        /// Category key
        #[arg(long)]
        category: Category,
        /// Limit in dollars
        #[arg(long)]
        limit: f64,
        /// First covered day
        #[arg(long)]
        start: NaiveDate,
        /// Last covered day
        #[arg(long)]
        end: NaiveDate,
    },

    /// Show budgets with their progress
    Budgets {
        #[command(flatten)]
        auth: Credentials,
        /// Only budgets covering today
        #[arg(long)]
        active: bool,
    },

    /// Delete a budget
    DeleteBudget {
        #[command(flatten)]
        auth: Credentials,
        /// Budget id
        id: i64,
    },

    /// Add a bill reminder
    AddReminder {
        #[command(flatten)]
        auth: Credentials,
        /// Bill name
        #[arg(long)]
        bill: String,
        /// Due date
        #[arg(long)]
        due: NaiveDate,
        /// Amount due
        #[arg(long)]
        amount: f64,
    },

    /// List bill reminders
    Reminders {
        #[command(flatten)]
        auth: Credentials,
        /// Only bills due within the configured window
        #[arg(long, conflicts_with = "overdue")]
        upcoming: bool,
        /// Only bills already past due
        #[arg(long)]
        overdue: bool,
    },

    /// Delete a bill reminder
    DeleteReminder {
        #[command(flatten)]
        auth: Credentials,
        /// Reminder id
        id: i64,
    },

    /// Add a savings goal
    AddGoal {
        #[command(flatten)]
        auth: Credentials,
        /// Goal name
        #[arg(long)]
        name: String,
        /// Amount to reach
        #[arg(long)]
        target: f64,
        /// Amount already saved
        #[arg(long, default_value_t = 0.0)]
        current: f64,
        /// Target date
        #[arg(long)]
        due: NaiveDate,
    },

    /// Put money toward a goal
    Contribute {
        #[command(flatten)]
        auth: Credentials,
        /// Goal id
        id: i64,
        /// Amount to add
        #[arg(long)]
        amount: f64,
    },

    /// Show savings goals with their progress
    Goals {
        #[command(flatten)]
        auth: Credentials,
    },

    /// Delete a savings goal
    DeleteGoal {
        #[command(flatten)]
        auth: Credentials,
        /// Goal id
        id: i64,
    },

    /// Spending by category and by month
    Report {
        #[command(flatten)]
        auth: Credentials,
        /// First day to include, YYYY-MM-DD
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day to include, YYYY-MM-DD
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Overview of spending, budgets, goals and bills
    Dashboard {
        #[command(flatten)]
        auth: Credentials,
    },

    /// Write matching expenses as CSV
    Export {
        #[command(flatten)]
        auth: Credentials,
        #[command(flatten)]
        filter: FilterArgs,
        /// Output file, stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Delete the account and everything it owns
    DeleteAccount {
        #[command(flatten)]
        auth: Credentials,
    },
}

async fn login(db: &DatabaseConnection, auth: &Credentials) -> Result<UserContext> {
    auth::authenticate(db, &auth.email, &auth.password).await
}

/// Runs one command and returns what should be printed.
///
/// `today` anchors the default expense date, active budgets and the
/// reminder window.
pub async fn run(
    command: Command,
    config: &AppConfig,
    db: &DatabaseConnection,
    today: NaiveDate,
) -> Result<String> {
    match command {
        Command::Init => Ok(format!("Database ready at {}", config.database_url)),

        Command::Register {
            username,
            email,
            password,
        } => {
            let user = auth::register_user(
                db,
                NewUser {
                    username,
                    email,
                    password,
                },
            )
            .await?;
            Ok(format!("Registered {} <{}> as user #{}", user.username, user.email, user.id))
        }

        Command::AddExpense {
            auth,
            amount,
            category,
            date,
            description,
        } => {
            let ctx = login(db, &auth).await?;
            let created = expense::create_expense(
                db,
                &ctx,
                ExpenseInput {
                    amount,
                    category,
                    date: date.unwrap_or(today),
                    description,
                },
            )
            .await?;
            Ok(format!("Added {}", render::expense_line(&created)))
        }

        Command::Expenses { auth, filter, page } => {
            let ctx = login(db, &auth).await?;
            let filter = ExpenseFilter::from_params(&FilterParams::from(&filter));
            let page = parse_page(page.as_ref());
            let listing = expense::list_expenses(db, &ctx, &filter, page, config.page_size).await?;
            Ok(render::expense_page(&listing))
        }

        Command::EditExpense {
            auth,
            id,
            amount,
            category,
            date,
            description,
            clear_description,
        } => {
            let ctx = login(db, &auth).await?;
            let current = expense::get_expense(db, &ctx, id).await?;
            let description = if clear_description {
                None
            } else {
                description.or(current.description)
            };
            let category = match category {
                Some(category) => category,
                None => current.category.parse()?,
            };
            let updated = expense::update_expense(
                db,
                &ctx,
                id,
                ExpenseInput {
                    amount: amount.unwrap_or(current.amount),
                    category,
                    date: date.unwrap_or(current.date),
                    description,
                },
            )
            .await?;
            Ok(format!("Updated {}", render::expense_line(&updated)))
        }

        Command::DeleteExpense { auth, id } => {
            let ctx = login(db, &auth).await?;
            expense::delete_expense(db, &ctx, id).await?;
            Ok(format!("Deleted expense #{id}"))
        }

        Command::SetBudget {
            auth,
            category,
            limit,
            start,
            end,
        } => {
            let ctx = login(db, &auth).await?;
            let created = budget::create_budget(
                db,
                &ctx,
                BudgetInput {
                    category,
                    limit_amount: limit,
                    start_date: start,
                    end_date: end,
                },
            )
            .await?;
            Ok(format!(
                "Budget #{} set: {} {} from {} to {}",
                created.id,
                category.label(),
                format_amount(created.limit_amount),
                created.start_date,
                created.end_date
            ))
        }

        Command::Budgets { auth, active } => {
            let ctx = login(db, &auth).await?;
            let progress = if active {
                report::active_budget_progress(db, &ctx, today).await?
            } else {
                report::budget_progress_for_user(db, &ctx).await?
            };
            Ok(render::budget_lines(&progress))
        }

        Command::DeleteBudget { auth, id } => {
            let ctx = login(db, &auth).await?;
            budget::delete_budget(db, &ctx, id).await?;
            Ok(format!("Deleted budget #{id}"))
        }

        Command::AddReminder {
            auth,
            bill,
            due,
            amount,
        } => {
            let ctx = login(db, &auth).await?;
            let created = reminder::create_reminder(
                db,
                &ctx,
                ReminderInput {
                    bill_name: bill,
                    due_date: due,
                    amount,
                },
            )
            .await?;
            Ok(format!("Added reminder #{} {} due {}", created.id, created.bill_name, created.due_date))
        }

        Command::Reminders {
            auth,
            upcoming,
            overdue,
        } => {
            let ctx = login(db, &auth).await?;
            let bills = if upcoming {
                reminder::upcoming_reminders(db, &ctx, today, config.reminder_window_days).await?
            } else if overdue {
                reminder::overdue_reminders(db, &ctx, today).await?
            } else {
                reminder::list_reminders(db, &ctx).await?
            };
            Ok(render::reminder_lines(&bills))
        }

        Command::DeleteReminder { auth, id } => {
            let ctx = login(db, &auth).await?;
            reminder::delete_reminder(db, &ctx, id).await?;
            Ok(format!("Deleted reminder #{id}"))
        }

        Command::AddGoal {
            auth,
            name,
            target,
            current,
            due,
        } => {
            let ctx = login(db, &auth).await?;
            let created = goal::create_goal(
                db,
                &ctx,
                GoalInput {
                    name,
                    target_amount: target,
                    current_amount: current,
                    due_date: due,
                },
            )
            .await?;
            Ok(format!("Added goal #{} {}", created.id, created.name))
        }

        Command::Contribute { auth, id, amount } => {
            let ctx = login(db, &auth).await?;
            let updated = goal::contribute_to_goal(db, &ctx, id, amount).await?;
            Ok(render::goal_lines(&[report::goal_progress(&updated)]))
        }

        Command::Goals { auth } => {
            let ctx = login(db, &auth).await?;
            let progress = report::goal_progress_for_user(db, &ctx).await?;
            Ok(render::goal_lines(&progress))
        }

        Command::DeleteGoal { auth, id } => {
            let ctx = login(db, &auth).await?;
            goal::delete_goal(db, &ctx, id).await?;
            Ok(format!("Deleted goal #{id}"))
        }

        Command::Report { auth, from, to } => {
            let ctx = login(db, &auth).await?;
            let by_category = report::category_totals(db, &ctx).await?;
            let by_month = report::monthly_totals(db, &ctx, from, to).await?;
            Ok(render::spending_report(&by_category, &by_month))
        }

        Command::Dashboard { auth } => {
            let ctx = login(db, &auth).await?;
            let view = report::build_dashboard(db, &ctx, config, today).await?;
            Ok(render::dashboard(&view))
        }

        Command::Export {
            auth,
            filter,
            output,
        } => {
            let ctx = login(db, &auth).await?;
            let filter = ExpenseFilter::from_params(&FilterParams::from(&filter));
            match output {
                Some(path) => {
                    let file = BufWriter::new(File::create(&path)?);
                    let rows = export::export_expenses_csv(db, &ctx, &filter, file).await?;
                    Ok(format!("Exported {rows} expenses to {}", path.display()))
                }
                None => {
                    let mut buffer = Vec::new();
                    export::export_expenses_csv(db, &ctx, &filter, &mut buffer).await?;
                    Ok(String::from_utf8_lossy(&buffer).trim_end().to_string())
                }
            }
        }

        Command::DeleteAccount { auth } => {
            let ctx = login(db, &auth).await?;
            auth::delete_user(db, &ctx).await?;
            info!(username = %ctx.username, "Account removed");
            Ok(format!("Deleted account {}", ctx.username))
        }
    }
}
