//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Every table except `users` carries a `user_id` owner reference.

pub mod budget;
pub mod expense;
pub mod goal;
pub mod reminder;
pub mod user;

// Re-export specific types to avoid conflicts
pub use budget::{Column as BudgetColumn, Entity as Budget, Model as BudgetModel};
pub use expense::{Column as ExpenseColumn, Entity as Expense, Model as ExpenseModel};
pub use goal::{Column as GoalColumn, Entity as Goal, Model as GoalModel};
pub use reminder::{Column as ReminderColumn, Entity as Reminder, Model as ReminderModel};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
