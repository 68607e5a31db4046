//! Custom book entity - a user-defined ledger kept by a pastorate.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Custom book database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "custom_books")]
pub struct Model {
    /// Unique identifier, also the owner scope of the book's entries
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Pastorate keeping the book
    pub pastorate_id: i64,
    /// Display name, e.g. "Building Fund"
    pub name: String,
}

/// Each custom book belongs to one pastorate
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning pastorate
    #[sea_orm(
        belongs_to = "super::pastorate::Entity",
        from = "Column::PastorateId",
        to = "super::pastorate::Column::Id"
    )]
    Pastorate,
}

impl Related<super::pastorate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pastorate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
