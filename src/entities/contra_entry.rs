//! Contra entity - transfers between a pastorate's own books (cash to bank and back).
//!
//! Contra is the only kind that may be numbered in the combined `"all"` book.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Contra database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contra_entries")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// External-facing `CT-XXXXX` code
    #[sea_orm(unique)]
    pub transaction_id: String,
    /// Owning pastorate
    pub pastorate_id: i64,
    /// `"cash"`, `"bank"`, `"diocese"` or `"all"`
    pub book_type: String,
    /// Contra number within the pastorate and book
    pub contra_number: i64,
    /// Date of the transfer
    pub contra_date: Date,
    /// Amount transferred
    pub amount: f64,
    /// Contra head
    pub category_id: i64,
    /// Optional description of the other side of the transfer
    pub counterpart_name: Option<String>,
    /// Free-text particulars
    pub notes: Option<String>,
    /// User who created the entry
    pub created_by: String,
    /// When the entry was created
    pub created_at: DateTimeUtc,
    /// When the entry was last modified
    pub updated_at: DateTimeUtc,
}

/// Contra entries have no declared relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
