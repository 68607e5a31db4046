//! Receipt entity - money received by a church, numbered per church and book.
//!
//! Receipts are the most frequently written ledger. Each row carries a
//! `RP-XXXXX` transaction id that is unique across the whole table and a
//! receipt number that is unique within `(church_id, book_type)`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Receipt database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "receipts")]
pub struct Model {
    /// Unique identifier for the receipt row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// External-facing `RP-XXXXX` code
    #[sea_orm(unique)]
    pub transaction_id: String,
    /// Church that issued the receipt
    pub church_id: i64,
    /// `"cash"` or `"bank"`
    pub book_type: String,
    /// Receipt number within the church and book
    pub receipt_number: i64,
    /// Date printed on the receipt
    pub receipt_date: Date,
    /// Amount received
    pub amount: f64,
    /// Name of the payer
    pub payer_name: String,
    /// Family the payment is credited to, if any
    pub family_id: Option<i64>,
    /// Offering or income category
    pub category_id: i64,
    /// Optional subcategory
    pub subcategory_id: Option<i64>,
    /// Free-text particulars
    pub notes: Option<String>,
    /// User who created the receipt
    pub created_by: String,
    /// When the receipt was created
    pub created_at: DateTimeUtc,
    /// When the receipt was last modified
    pub updated_at: DateTimeUtc,
}

/// Receipts reference lookup tables by id only; no relations are declared.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
