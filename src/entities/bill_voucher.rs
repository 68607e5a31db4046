//! Bill voucher entity - payments made by a pastorate against a bill.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bill voucher database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bill_vouchers")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// External-facing `BV-XXXXX` code
    #[sea_orm(unique)]
    pub transaction_id: String,
    /// Owning pastorate
    pub pastorate_id: i64,
    /// `"cash"`, `"bank"` or `"diocese"`
    pub book_type: String,
    /// Voucher number within the pastorate and book
    pub voucher_number: i64,
    /// Voucher date
    pub voucher_date: Date,
    /// Amount paid
    pub amount: f64,
    /// Who was paid
    pub payee_name: String,
    /// Expense category
    pub category_id: i64,
    /// Optional subcategory
    pub subcategory_id: Option<i64>,
    /// Free-text particulars
    pub notes: Option<String>,
    /// User who created the voucher
    pub created_by: String,
    /// When the voucher was created
    pub created_at: DateTimeUtc,
    /// When the voucher was last modified
    pub updated_at: DateTimeUtc,
}

/// Bill vouchers have no declared relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
