//! Other-credit entity - income recorded at pastorate level outside receipts.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Other-credit database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "other_credits")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// External-facing `OC-XXXXX` code
    #[sea_orm(unique)]
    pub transaction_id: String,
    /// Owning pastorate
    pub pastorate_id: i64,
    /// `"cash"`, `"bank"` or `"diocese"`
    pub book_type: String,
    /// Credit number within the pastorate and book
    pub credit_number: i64,
    /// Date of the credit
    pub credit_date: Date,
    /// Amount credited
    pub amount: f64,
    /// Who the money came from
    pub payer_name: String,
    /// Income category
    pub category_id: i64,
    /// Optional subcategory
    pub subcategory_id: Option<i64>,
    /// Free-text particulars
    pub notes: Option<String>,
    /// User who created the credit
    pub created_by: String,
    /// When the credit was created
    pub created_at: DateTimeUtc,
    /// When the credit was last modified
    pub updated_at: DateTimeUtc,
}

/// Other credits have no declared relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
