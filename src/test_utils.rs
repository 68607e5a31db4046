//! Shared test utilities for the church ledger.
//!
//! This module provides common helper functions for setting up test databases
//! and building entry drafts with sensible defaults.

use crate::{
    core::EntryDraft,
    entities::family,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Builds a complete receipt-shaped draft.
///
/// # Defaults
/// * `date`: 2026-03-01
/// * `amount`: 250.0
/// * `counterpart_name`: `"John Samuel"`
/// * `category_id`: 10
/// * `user_id`: `"admin"`
///
/// The draft carries every field a receipt needs, which covers every other
/// kind's required fields as well.
pub fn receipt_draft(
    transaction_id: &str,
    sequence_number: i64,
    owner_scope: i64,
    book_type: &str,
) -> EntryDraft {
    EntryDraft {
        transaction_id: Some(transaction_id.to_string()),
        sequence_number: Some(sequence_number),
        owner_scope: Some(owner_scope),
        book_type: Some(book_type.to_string()),
        date: NaiveDate::from_ymd_opt(2026, 3, 1),
        amount: Some(250.0),
        counterpart_name: Some("John Samuel".to_string()),
        category_id: Some(10),
        user_id: Some("admin".to_string()),
        ..EntryDraft::default()
    }
}

/// Inserts a family into the register of `church_id`.
///
/// The church must already exist; seed it first.
pub async fn insert_family(
    db: &DatabaseConnection,
    church_id: i64,
    family_number: &str,
    head_name: &str,
) -> Result<family::Model> {
    let model = family::ActiveModel {
        church_id: Set(church_id),
        family_number: Set(family_number.to_string()),
        head_name: Set(head_name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model)
}
