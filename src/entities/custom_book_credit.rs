//! Custom book credit entity - money received into a user-defined book.
//!
//! Voucher numbers are scoped to the custom book, not to the pastorate that
//! owns it, and run independently of the book's other entry kinds.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Custom book credit database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "custom_book_credits")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// External-facing `CC-XXXXX` code
    #[sea_orm(unique)]
    pub transaction_id: String,
    /// Custom book the entry belongs to
    pub book_id: i64,
    /// `"cash"` or `"bank"`
    pub book_type: String,
    /// Voucher number within the book and book type
    pub voucher_number: i64,
    /// Entry date
    pub entry_date: Date,
    /// Entry amount
    pub amount: f64,
    /// Book category
    pub category_id: i64,
    /// Optional subcategory
    pub subcategory_id: Option<i64>,
    /// Optional payer or payee
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

/// No declared relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
