//! Database configuration module.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs. Each entry table additionally gets a
//! composite unique index over `(owner scope, book_type, sequence number)`; together with
//! the column-level UNIQUE on `transaction_id` this is what enforces both uniqueness rules
//! when two writers race past the registrar's pre-checks.

use crate::{
    config::settings::DatabaseSettings,
    core::kind::EntryKind,
    entities::{
        Acquittance, BillVoucher, Category, Church, ContraEntry, CustomBook, CustomBookContra,
        CustomBookCredit, CustomBookDebit, Family, OtherCredit, Pastorate, Receipt,
    },
    errors::{Error, Result},
};
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, EntityName, EntityTrait, Schema,
    sea_query::Index,
};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Connects to the configured database, creating the parent directory of a
/// file-backed `SQLite` database if it does not exist yet.
#[instrument(skip_all, fields(url = %settings.url))]
pub async fn connect(settings: &DatabaseSettings) -> Result<DatabaseConnection> {
    if let Some(parent) = sqlite_parent_dir(&settings.url) {
        std::fs::create_dir_all(parent).map_err(|e| Error::Config {
            message: format!("Failed to create database directory {}: {e}", parent.display()),
        })?;
    }

    let db = Database::connect(settings.url.as_str()).await?;
    info!("Database connection opened.");
    Ok(db)
}

/// Directory holding a file-backed `SQLite` database, if the URL names one.
fn sqlite_parent_dir(url: &str) -> Option<&Path> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" || path.starts_with(":memory") {
        return None;
    }
    Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}

/// Creates every table and unique index that does not exist yet.
#[instrument(skip_all)]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    create_table(db, Pastorate).await?;
    create_table(db, Church).await?;
    create_table(db, CustomBook).await?;
    create_table(db, Category).await?;
    create_table(db, Family).await?;

    create_entry_table::<Receipt>(db).await?;
    create_entry_table::<OtherCredit>(db).await?;
    create_entry_table::<ContraEntry>(db).await?;
    create_entry_table::<BillVoucher>(db).await?;
    create_entry_table::<Acquittance>(db).await?;
    create_entry_table::<CustomBookCredit>(db).await?;
    create_entry_table::<CustomBookDebit>(db).await?;
    create_entry_table::<CustomBookContra>(db).await?;

    info!("Database tables ensured.");
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<()> {
    let builder = db.get_database_backend();
    let mut table = Schema::new(builder).create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(builder.build(&table)).await?;
    Ok(())
}

async fn create_entry_table<K: EntryKind>(db: &DatabaseConnection) -> Result<()> {
    create_table(db, K::default()).await?;

    let cols = K::columns();
    let table_name = K::default().table_name().to_string();
    let index = Index::create()
        .name(format!("idx_{table_name}_scope_book_sequence"))
        .table(K::default())
        .col(cols.owner_scope)
        .col(cols.book_type)
        .col(cols.sequence_number)
        .unique()
        .if_not_exists()
        .to_owned();

    let builder = db.get_database_backend();
    db.execute(builder.build(&index)).await?;
    debug!(table = %table_name, "Entry table and sequence index ensured.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ReceiptModel;
    use sea_orm::{QuerySelect, Statement};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<ReceiptModel> = Receipt::find().limit(1).all(&db).await?;
        let _ = CustomBookCredit::find().limit(1).all(&db).await?;
        let _ = CustomBookContra::find().limit(1).all(&db).await?;
        let _ = Family::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_repeatable() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_sequence_index_is_unique() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        let row = db
            .query_one(Statement::from_string(
                db.get_database_backend(),
                "SELECT \"unique\" AS is_unique FROM pragma_index_list('receipts') \
                 WHERE name = 'idx_receipts_scope_book_sequence'",
            ))
            .await?;
        let is_unique: i64 = row
            .map(|r| r.try_get("", "is_unique"))
            .transpose()?
            .unwrap_or_default();
        assert_eq!(is_unique, 1);

        // The column list follows the composite key order
        let columns: Vec<String> = db
            .query_all(Statement::from_string(
                db.get_database_backend(),
                "SELECT name FROM pragma_index_info('idx_receipts_scope_book_sequence') ORDER BY seqno",
            ))
            .await?
            .iter()
            .map(|r| r.try_get::<String>("", "name"))
            .collect::<std::result::Result<_, _>>()?;
        assert_eq!(
            columns,
            vec![
                "church_id".to_string(),
                "book_type".to_string(),
                "receipt_number".to_string()
            ]
        );
        Ok(())
    }

    #[test]
    fn test_sqlite_parent_dir() {
        assert_eq!(
            sqlite_parent_dir("sqlite://data/church_ledger.sqlite?mode=rwc"),
            Some(Path::new("data"))
        );
        assert_eq!(sqlite_parent_dir("sqlite::memory:"), None);
        assert_eq!(sqlite_parent_dir("sqlite://ledger.sqlite"), None);
        assert_eq!(sqlite_parent_dir("postgres://localhost/ledger"), None);
    }
}
