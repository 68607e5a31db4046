//! Acquittance entity - payroll ("indent") payments to pastorate staff.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Acquittance database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "acquittances")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// External-facing `AQ-XXXXX` code
    #[sea_orm(unique)]
    pub transaction_id: String,
    /// Owning pastorate
    pub pastorate_id: i64,
    /// `"cash"`, `"bank"` or `"diocese"`
    pub book_type: String,
    /// Acquittance number within the pastorate and book
    pub acquittance_number: i64,
    /// Payment date
    pub payment_date: Date,
    /// Amount paid
    pub amount: f64,
    /// Staff member paid
    pub payee_name: String,
    /// Salary or allowance head
    pub category_id: i64,
    /// Optional subcategory
    pub subcategory_id: Option<i64>,
    /// Free-text particulars
    pub notes: Option<String>,
    /// User who created the record
    pub created_by: String,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Acquittances have no declared relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
