//! Budget entity - Spending limit for one category over an inclusive date range.
//!
//! A user may hold several budgets for the same category as long as they
//! cover different periods.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Budget database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    /// Unique identifier for the budget
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Category key the limit applies to
    pub category: String,
    /// Maximum planned spend in dollars
    pub limit_amount: f64,
    /// First day covered (inclusive)
    pub start_date: Date,
    /// Last day covered (inclusive)
    pub end_date: Date,
    /// Owning user
    pub user_id: i64,
}

/// Defines relationships between Budget and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each budget belongs to one user
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
