//! Command dispatch - runs one parsed [`Command`] and returns its JSON payload.

use crate::{
    cli::{Command, LedgerKind},
    config::{database::create_tables, settings::AppConfig},
    core::{
        EntryDraft, EntryKind, Registrar,
        lookup::{categories_for, owner_scope_exists, search_families, seed_lookups},
    },
    entities::{
        Acquittance, BillVoucher, ContraEntry, CustomBookContra, CustomBookCredit,
        CustomBookDebit, OtherCredit, Receipt,
    },
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{info, instrument, warn};

/// An operation on one ledger, with its arguments resolved.
#[derive(Debug)]
enum EntryAction {
    GenerateId,
    NextNumber { scope: i64, book: String },
    Create(EntryDraft),
    Update { id: i64, draft: EntryDraft },
    Delete { id: i64 },
    ShowById { id: i64 },
    ShowByTransactionId { transaction_id: String },
    List { scope: i64, book: String },
}

/// Executes `command` against `db` and returns the value for the response's `data`.
#[instrument(skip_all)]
pub async fn execute(
    db: &DatabaseConnection,
    config: &AppConfig,
    command: Command,
) -> Result<Value> {
    match command {
        Command::Init => {
            create_tables(db).await?;
            Ok(serde_json::to_value(seed_lookups(db, config).await?)?)
        }
        Command::Families {
            church,
            query,
            limit,
        } => Ok(serde_json::to_value(
            search_families(db, church, &query, limit).await?,
        )?),
        Command::Categories { kind } => {
            Ok(serde_json::to_value(categories_for(db, kind.label()).await?)?)
        }
        Command::GenerateId { kind } => run(db, config, kind, EntryAction::GenerateId).await,
        Command::NextNumber { kind, scope, book } => {
            run(db, config, kind, EntryAction::NextNumber { scope, book }).await
        }
        Command::Create { kind, payload } => {
            let draft = payload.read_draft()?;
            warn_unknown_owner(db, kind, &draft).await?;
            run(db, config, kind, EntryAction::Create(draft)).await
        }
        Command::Update { kind, id, payload } => {
            let draft = payload.read_draft()?;
            run(db, config, kind, EntryAction::Update { id, draft }).await
        }
        Command::Delete { kind, id } => run(db, config, kind, EntryAction::Delete { id }).await,
        Command::Show {
            kind,
            id,
            transaction_id,
        } => {
            let action = match (id, transaction_id) {
                (Some(id), _) => EntryAction::ShowById { id },
                (None, Some(transaction_id)) => {
                    EntryAction::ShowByTransactionId { transaction_id }
                }
                (None, None) => {
                    return Err(Error::MissingField {
                        field: "transactionId",
                    });
                }
            };
            run(db, config, kind, action).await
        }
        Command::List { kind, scope, book } => {
            run(db, config, kind, EntryAction::List { scope, book }).await
        }
    }
}

/// Logs a warning when a new entry names an owner scope that is not in the lookup tables.
///
/// Entry tables carry no foreign keys, so the write still goes ahead.
async fn warn_unknown_owner(
    db: &DatabaseConnection,
    kind: LedgerKind,
    draft: &EntryDraft,
) -> Result<()> {
    if let Some(scope) = draft.owner_scope {
        if !owner_scope_exists(db, kind.owner(), scope).await? {
            warn!(
                kind = kind.label(),
                owner = ?kind.owner(),
                scope,
                "Owner scope not found in lookup tables."
            );
        }
    }
    Ok(())
}

async fn run(
    db: &DatabaseConnection,
    config: &AppConfig,
    kind: LedgerKind,
    action: EntryAction,
) -> Result<Value> {
    match kind {
        LedgerKind::Receipt => run_entry::<Receipt>(db, config, action).await,
        LedgerKind::OtherCredit => run_entry::<OtherCredit>(db, config, action).await,
        LedgerKind::Contra => run_entry::<ContraEntry>(db, config, action).await,
        LedgerKind::BillVoucher => run_entry::<BillVoucher>(db, config, action).await,
        LedgerKind::Acquittance => run_entry::<Acquittance>(db, config, action).await,
        LedgerKind::BookCredit => run_entry::<CustomBookCredit>(db, config, action).await,
        LedgerKind::BookDebit => run_entry::<CustomBookDebit>(db, config, action).await,
        LedgerKind::BookContra => run_entry::<CustomBookContra>(db, config, action).await,
    }
}

async fn run_entry<K>(
    db: &DatabaseConnection,
    config: &AppConfig,
    action: EntryAction,
) -> Result<Value>
where
    K: EntryKind,
    K::Model: Serialize,
{
    let registrar = Registrar::<K>::with_settings(db, &config.registrar);

    let value = match action {
        EntryAction::GenerateId => {
            let transaction_id = registrar.generate_transaction_id().await?;
            info!(kind = K::LABEL, %transaction_id, "Transaction id issued.");
            json!({ "transactionId": transaction_id })
        }
        EntryAction::NextNumber { scope, book } => {
            let next = registrar.next_sequence_number(scope, &book).await?;
            json!({ "sequenceNumber": next })
        }
        EntryAction::Create(draft) => {
            let row = registrar
                .create(&draft)
                .await
                .inspect_err(|e| warn!(kind = K::LABEL, "Create rejected: {}", e))?;
            info!(kind = K::LABEL, id = K::row_id(&row), "Entry created.");
            serde_json::to_value(row)?
        }
        EntryAction::Update { id, draft } => {
            let row = registrar
                .update(id, &draft)
                .await
                .inspect_err(|e| warn!(kind = K::LABEL, id, "Update rejected: {}", e))?;
            info!(kind = K::LABEL, id, "Entry updated.");
            serde_json::to_value(row)?
        }
        EntryAction::Delete { id } => {
            registrar
                .delete(id)
                .await
                .inspect_err(|e| warn!(kind = K::LABEL, id, "Delete rejected: {}", e))?;
            info!(kind = K::LABEL, id, "Entry deleted.");
            json!({ "id": id })
        }
        EntryAction::ShowById { id } => serde_json::to_value(registrar.get(id).await?)?,
        EntryAction::ShowByTransactionId { transaction_id } => {
            serde_json::to_value(registrar.find_by_transaction_id(&transaction_id).await?)?
        }
        EntryAction::List { scope, book } => {
            serde_json::to_value(registrar.list(scope, &book).await?)?
        }
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        cli::PayloadArgs,
        config::settings::{CategorySeed, ChurchSeed, PastorateSeed},
        test_utils::setup_test_db,
    };

    fn config() -> AppConfig {
        AppConfig {
            pastorates: vec![PastorateSeed {
                id: 1,
                name: "Nazareth Pastorate".to_string(),
            }],
            churches: vec![ChurchSeed {
                id: 7,
                pastorate_id: 1,
                name: "St. Thomas Church".to_string(),
            }],
            categories: vec![CategorySeed {
                id: 10,
                name: "Thanksgiving".to_string(),
                ledger: "receipt".to_string(),
            }],
            ..AppConfig::default()
        }
    }

    fn payload(json: &str) -> PayloadArgs {
        PayloadArgs {
            json: Some(json.to_string()),
            file: None,
        }
    }

    const RECEIPT: &str = r#"{
        "transactionId": "RP-AB12C",
        "sequenceNumber": 1,
        "ownerScope": 7,
        "bookType": "cash",
        "date": "2026-03-01",
        "amount": 250.0,
        "counterpartName": "John Samuel",
        "categoryId": 10,
        "userId": "admin"
    }"#;

    #[tokio::test]
    async fn test_init_seeds_lookups() -> Result<()> {
        let db = setup_test_db().await?;
        let value = execute(&db, &config(), Command::Init).await?;
        assert_eq!(value["churches"], 1);
        assert_eq!(value["categories"], 1);

        let categories = execute(
            &db,
            &config(),
            Command::Categories {
                kind: LedgerKind::Receipt,
            },
        )
        .await?;
        assert_eq!(categories[0]["name"], "Thanksgiving");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_then_next_number() -> Result<()> {
        let db = setup_test_db().await?;
        let config = config();

        let created = execute(
            &db,
            &config,
            Command::Create {
                kind: LedgerKind::Receipt,
                payload: payload(RECEIPT),
            },
        )
        .await?;
        assert_eq!(created["transaction_id"], "RP-AB12C");
        assert_eq!(created["receipt_number"], 1);

        let next = execute(
            &db,
            &config,
            Command::NextNumber {
                kind: LedgerKind::Receipt,
                scope: 7,
                book: "cash".to_string(),
            },
        )
        .await?;
        assert_eq!(next, json!({ "sequenceNumber": 2 }));

        let shown = execute(
            &db,
            &config,
            Command::Show {
                kind: LedgerKind::Receipt,
                id: None,
                transaction_id: Some("RP-AB12C".to_string()),
            },
        )
        .await?;
        assert_eq!(shown["id"], created["id"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_duplicate_is_conflict() -> Result<()> {
        let db = setup_test_db().await?;
        let config = config();
        let create = || Command::Create {
            kind: LedgerKind::Receipt,
            payload: payload(RECEIPT),
        };

        execute(&db, &config, create()).await?;
        let err = execute(&db, &config, create()).await.unwrap_err();
        assert!(matches!(err, Error::DuplicateTransactionId { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let result = execute(
            &db,
            &config(),
            Command::Delete {
                kind: LedgerKind::BillVoucher,
                id: 42,
            },
        )
        .await;
        assert!(matches!(
            result,
            Err(Error::NotFound {
                kind: "bill voucher",
                id: 42
            })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_show_without_identifier_is_validation_error() -> Result<()> {
        let db = setup_test_db().await?;
        let result = execute(
            &db,
            &config(),
            Command::Show {
                kind: LedgerKind::Receipt,
                id: None,
                transaction_id: None,
            },
        )
        .await;
        assert!(matches!(
            result,
            Err(Error::MissingField {
                field: "transactionId"
            })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_generate_id_uses_kind_prefix() -> Result<()> {
        let db = setup_test_db().await?;
        let value = execute(
            &db,
            &config(),
            Command::GenerateId {
                kind: LedgerKind::Acquittance,
            },
        )
        .await?;
        let id = value["transactionId"].as_str().unwrap();
        assert!(id.starts_with("AQ-"));
        assert_eq!(id.len(), 8);
        Ok(())
    }
}
