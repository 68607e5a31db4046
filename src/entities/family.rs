//! Family entity - the church's family register, searched for payer autocomplete.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Family database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "families")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Church the family is registered with
    pub church_id: i64,
    /// Register number, e.g. "F-102"
    pub family_number: String,
    /// Name of the head of the family
    pub head_name: String,
}

/// Each family belongs to one church
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Church the family is registered with
    #[sea_orm(
        belongs_to = "super::church::Entity",
        from = "Column::ChurchId",
        to = "super::church::Column::Id"
    )]
    Church,
}

impl Related<super::church::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Church.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
