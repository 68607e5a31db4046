//! Church entity - owner scope for receipts and the family register.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Church database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "churches")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Pastorate the church belongs to
    pub pastorate_id: i64,
    /// Display name
    pub name: String,
}

/// Defines relationships between Church and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each church belongs to one pastorate
    #[sea_orm(
        belongs_to = "super::pastorate::Entity",
        from = "Column::PastorateId",
        to = "super::pastorate::Column::Id"
    )]
    Pastorate,
    /// One church has many registered families
    #[sea_orm(has_many = "super::family::Entity")]
    Families,
}

impl Related<super::pastorate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pastorate.def()
    }
}

impl Related<super::family::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Families.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
