//! Pastorate entity - the administrative unit most ledgers are scoped to.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pastorate database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pastorates")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name
    pub name: String,
}

/// A pastorate has many churches and custom books
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Churches in this pastorate
    #[sea_orm(has_many = "super::church::Entity")]
    Churches,
    /// Custom books kept by this pastorate
    #[sea_orm(has_many = "super::custom_book::Entity")]
    CustomBooks,
}

impl Related<super::church::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Churches.def()
    }
}

impl Related<super::custom_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomBooks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
