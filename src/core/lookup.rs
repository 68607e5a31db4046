//! Read-only lookups over the collaborating tables - owner scopes, categories
//! and the family register - plus seeding them from configuration.

use crate::{
    config::settings::AppConfig,
    entities::{
        Category, Church, CustomBook, Family, Pastorate, category, church, custom_book, family,
        pastorate,
    },
    errors::Result,
};
use sea_orm::{Condition, QueryOrder, QuerySelect, Set, prelude::*};
use serde::Serialize;
use tracing::{info, instrument};

/// What an entry kind's owner scope id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerKind {
    /// `pastorates.id`
    Pastorate,
    /// `churches.id`
    Church,
    /// `custom_books.id`
    CustomBook,
}

/// Returns whether the pastorate, church or custom book `id` exists.
pub async fn owner_scope_exists<C>(db: &C, owner: OwnerKind, id: i64) -> Result<bool>
where
    C: ConnectionTrait,
{
    let found = match owner {
        OwnerKind::Pastorate => Pastorate::find_by_id(id).one(db).await?.is_some(),
        OwnerKind::Church => Church::find_by_id(id).one(db).await?.is_some(),
        OwnerKind::CustomBook => CustomBook::find_by_id(id).one(db).await?.is_some(),
    };
    Ok(found)
}

/// Finds families of a church whose head name or family number contains `partial`.
///
/// Matching is case-insensitive for ASCII (SQLite `LIKE`). Results are sorted by
/// head name and capped at `limit`, which is what payer-name autocomplete needs.
pub async fn search_families(
    db: &DatabaseConnection,
    church_id: i64,
    partial: &str,
    limit: u64,
) -> Result<Vec<family::Model>> {
    let partial = partial.trim();
    let mut query = Family::find().filter(family::Column::ChurchId.eq(church_id));

    if !partial.is_empty() {
        query = query.filter(
            Condition::any()
                .add(family::Column::HeadName.contains(partial))
                .add(family::Column::FamilyNumber.contains(partial)),
        );
    }

    query
        .order_by_asc(family::Column::HeadName)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists the categories offered for one ledger, ordered by name.
pub async fn categories_for(
    db: &DatabaseConnection,
    ledger: &str,
) -> Result<Vec<category::Model>> {
    Category::find()
        .filter(category::Column::Ledger.eq(ledger))
        .order_by_asc(category::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Counts of rows inserted by [`seed_lookups`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    /// Pastorates inserted
    pub pastorates: usize,
    /// Churches inserted
    pub churches: usize,
    /// Custom books inserted
    pub custom_books: usize,
    /// Categories inserted
    pub categories: usize,
}

/// Inserts the lookup rows listed in the configuration that are not already present.
///
/// Rows are matched by id, so running this repeatedly is harmless. Existing
/// rows are left untouched even if the configured name differs.
#[instrument(skip_all)]
pub async fn seed_lookups(db: &DatabaseConnection, config: &AppConfig) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    for seed in &config.pastorates {
        if Pastorate::find_by_id(seed.id).one(db).await?.is_none() {
            pastorate::ActiveModel {
                id: Set(seed.id),
                name: Set(seed.name.clone()),
            }
            .insert(db)
            .await?;
            summary.pastorates += 1;
        }
    }

    for seed in &config.churches {
        if Church::find_by_id(seed.id).one(db).await?.is_none() {
            church::ActiveModel {
                id: Set(seed.id),
                pastorate_id: Set(seed.pastorate_id),
                name: Set(seed.name.clone()),
            }
            .insert(db)
            .await?;
            summary.churches += 1;
        }
    }

    for seed in &config.custom_books {
        if CustomBook::find_by_id(seed.id).one(db).await?.is_none() {
            custom_book::ActiveModel {
                id: Set(seed.id),
                pastorate_id: Set(seed.pastorate_id),
                name: Set(seed.name.clone()),
            }
            .insert(db)
            .await?;
            summary.custom_books += 1;
        }
    }

    for seed in &config.categories {
        if Category::find_by_id(seed.id).one(db).await?.is_none() {
            category::ActiveModel {
                id: Set(seed.id),
                name: Set(seed.name.clone()),
                ledger: Set(seed.ledger.clone()),
            }
            .insert(db)
            .await?;
            summary.categories += 1;
        }
    }

    info!(?summary, "Lookup tables seeded.");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::settings::{CategorySeed, ChurchSeed, CustomBookSeed, PastorateSeed};
    use crate::test_utils::*;

    fn sample_config() -> AppConfig {
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
            custom_books: vec![CustomBookSeed {
                id: 3,
                pastorate_id: 1,
                name: "Building Fund".to_string(),
            }],
            categories: vec![
                CategorySeed {
                    id: 10,
                    name: "Thanksgiving".to_string(),
                    ledger: "receipt".to_string(),
                },
                CategorySeed {
                    id: 11,
                    name: "Harvest Festival".to_string(),
                    ledger: "receipt".to_string(),
                },
                CategorySeed {
                    id: 20,
                    name: "Electricity".to_string(),
                    ledger: "bill voucher".to_string(),
                },
            ],
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn test_seed_lookups_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let config = sample_config();

        let first = seed_lookups(&db, &config).await?;
        assert_eq!(
            first,
            SeedSummary {
                pastorates: 1,
                churches: 1,
                custom_books: 1,
                categories: 3,
            }
        );

        let second = seed_lookups(&db, &config).await?;
        assert_eq!(second, SeedSummary::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_owner_scope_exists() -> Result<()> {
        let db = setup_test_db().await?;
        seed_lookups(&db, &sample_config()).await?;

        assert!(owner_scope_exists(&db, OwnerKind::Church, 7).await?);
        assert!(owner_scope_exists(&db, OwnerKind::Pastorate, 1).await?);
        assert!(owner_scope_exists(&db, OwnerKind::CustomBook, 3).await?);
        assert!(!owner_scope_exists(&db, OwnerKind::Church, 1).await?);
        assert!(!owner_scope_exists(&db, OwnerKind::CustomBook, 7).await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_categories_for_ledger_sorted() -> Result<()> {
        let db = setup_test_db().await?;
        seed_lookups(&db, &sample_config()).await?;

        let names: Vec<String> = categories_for(&db, "receipt")
            .await?
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Harvest Festival", "Thanksgiving"]);

        assert!(categories_for(&db, "acquittance").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_search_families() -> Result<()> {
        let db = setup_test_db().await?;
        seed_lookups(&db, &sample_config()).await?;
        insert_family(&db, 7, "F-101", "John Samuel").await?;
        insert_family(&db, 7, "F-102", "Mary Joseph").await?;
        insert_family(&db, 7, "F-103", "Samuel Devadoss").await?;

        let found = search_families(&db, 7, "samuel", 25).await?;
        let names: Vec<&str> = found.iter().map(|f| f.head_name.as_str()).collect();
        assert_eq!(names, vec!["John Samuel", "Samuel Devadoss"]);

        let by_number = search_families(&db, 7, "F-102", 25).await?;
        assert_eq!(by_number.len(), 1);
        assert_eq!(by_number[0].head_name, "Mary Joseph");

        let capped = search_families(&db, 7, "", 2).await?;
        assert_eq!(capped.len(), 2);

        assert!(search_families(&db, 8, "John", 25).await?.is_empty());
        Ok(())
    }
}
