//! Expense entity - A single recorded spend.
//!
//! `category` holds the lowercase key of [`crate::core::category::Category`].
//! Amounts are always positive; the sign is implied by the table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Expense database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Unique identifier for the expense
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Amount spent in dollars
    pub amount: f64,
    /// Category key (e.g., "food", "transport")
    pub category: String,
    /// Day the money was spent
    pub date: Date,
    /// Optional free-text note
    pub description: Option<String>,
    /// Owning user
    pub user_id: i64,
}

/// Defines relationships between Expense and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each expense belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
