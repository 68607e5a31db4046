//! Ledger entry registrar - transaction ids, sequence numbers and guarded writes.
//!
//! [`Registrar`] is generic over an [`EntryKind`], so receipts, credits,
//! contras, vouchers, acquittances and custom-book entries all share one
//! implementation of:
//!
//! * issuing a `PREFIX-XXXXX` transaction id that is free in the kind's table,
//!   with a bounded number of collision retries;
//! * suggesting the next sequence number for an `(owner scope, book type)` pair;
//! * creating, updating and deleting rows after validating input and both
//!   uniqueness rules.
//!
//! The uniqueness pre-checks only exist to produce a friendly error. The unique
//! indexes declared by [`crate::config::database::create_tables`] are what
//! actually guarantees uniqueness, and a constraint violation raised by the
//! store is mapped to the same conflict errors as the pre-check.

use crate::{
    config::settings::RegistrarSettings,
    core::{
        book::BookType,
        draft::{EntryDraft, ValidEntry},
        kind::EntryKind,
        transaction_id,
    },
    errors::{Error, Result},
};
use chrono::Utc;
use rand::{Rng, SeedableRng, rngs::StdRng};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, IdenStatic, QueryOrder,
    QuerySelect, SqlErr, TransactionTrait, prelude::*, sea_query::Expr,
};
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// Issues identifiers and guards writes for one entry kind.
#[derive(Debug)]
pub struct Registrar<'db, K> {
    db: &'db DatabaseConnection,
    max_id_attempts: u32,
    kind: PhantomData<K>,
}

impl<'db, K: EntryKind> Registrar<'db, K> {
    /// Creates a registrar with default settings.
    #[must_use]
    pub fn new(db: &'db DatabaseConnection) -> Self {
        Self::with_settings(db, &RegistrarSettings::default())
    }

    /// Creates a registrar with explicit settings.
    #[must_use]
    pub fn with_settings(db: &'db DatabaseConnection, settings: &RegistrarSettings) -> Self {
        Self {
            db,
            max_id_attempts: settings.max_id_attempts.max(1),
            kind: PhantomData,
        }
    }

    /// The connection this registrar writes through.
    #[must_use]
    pub const fn connection(&self) -> &'db DatabaseConnection {
        self.db
    }

    /// Generates a transaction id not currently present in the kind's table.
    ///
    /// The id is only guaranteed free at the moment of the check; `create`
    /// re-validates it.
    pub async fn generate_transaction_id(&self) -> Result<String> {
        let mut rng = StdRng::from_os_rng();
        self.generate_transaction_id_with(&mut rng).await
    }

    /// Like [`Self::generate_transaction_id`], drawing candidates from `rng`.
    ///
    /// Retries only on collision. A storage error aborts immediately, and after
    /// the configured number of collisions [`Error::IdSpaceExhausted`] is returned.
    #[instrument(level = "debug", skip_all, fields(kind = K::LABEL))]
    pub async fn generate_transaction_id_with<R>(&self, rng: &mut R) -> Result<String>
    where
        R: Rng + ?Sized,
    {
        for attempt in 1..=self.max_id_attempts {
            let candidate = transaction_id::candidate(K::PREFIX, rng);
            if !transaction_id_taken::<K, _>(self.db, &candidate, None).await? {
                return Ok(candidate);
            }
            debug!(attempt, %candidate, "transaction id collision");
        }

        Err(Error::IdSpaceExhausted {
            prefix: K::PREFIX,
            attempts: self.max_id_attempts,
        })
    }

    /// Suggests the next sequence number for `(owner_scope, book_type)`.
    ///
    /// Returns one past the current maximum, or 1 for an empty scope. Gaps left
    /// by deleted entries are not filled. The value is advisory: two callers may be handed
    /// the same number and only the first to write it succeeds. A scope whose
    /// maximum is `i64::MAX` reports [`Error::SequenceExhausted`].
    #[instrument(level = "debug", skip(self), fields(kind = K::LABEL))]
    pub async fn next_sequence_number(&self, owner_scope: i64, book_type: &str) -> Result<i64> {
        let book_type = allowed_book_type::<K>(book_type)?;
        let cols = K::columns();

        let max: Option<i64> = K::find()
            .select_only()
            .column_as(Expr::col(cols.sequence_number).max(), "max_sequence")
            .filter(cols.owner_scope.eq(owner_scope))
            .filter(cols.book_type.eq(book_type.as_str()))
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?
            .flatten();

        let last = max.unwrap_or(0);
        last.checked_add(1).ok_or_else(|| Error::SequenceExhausted {
            kind: K::LABEL,
            owner_scope,
            book_type: book_type.as_str().to_string(),
            last,
        })
    }

    /// Validates and inserts a new entry, returning the persisted row.
    ///
    /// Checks run in order and the first failure is returned: required fields,
    /// book type, transaction id format, amount and number values, transaction id
    /// uniqueness, then sequence number uniqueness. Nothing is written on failure.
    #[instrument(level = "debug", skip_all, fields(kind = K::LABEL))]
    pub async fn create(&self, draft: &EntryDraft) -> Result<K::Model> {
        let entry = validate::<K>(draft)?;
        let cols = K::columns();

        let txn = self.db.begin().await?;
        ensure_unique::<K, _>(&txn, &entry, None).await?;

        K::insert(K::new_row(&entry, Utc::now()))
            .exec(&txn)
            .await
            .map_err(|err| map_write_error::<K>(err, &entry))?;

        let row = K::find()
            .filter(cols.transaction_id.eq(entry.transaction_id.as_str()))
            .one(&txn)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "{} {} missing after insert",
                    K::LABEL,
                    entry.transaction_id
                ))
            })?;

        txn.commit().await?;
        debug!(id = K::row_id(&row), "entry created");
        Ok(row)
    }

    /// Validates and rewrites entry `id`, returning the persisted row.
    ///
    /// Uniqueness checks ignore the row itself, so resubmitting an unchanged
    /// transaction id or number succeeds. The owner scope and creation audit
    /// columns are never rewritten: the update only matches a row with the
    /// submitted owner scope, and zero matched rows is reported as not found.
    #[instrument(level = "debug", skip(self, draft), fields(kind = K::LABEL))]
    pub async fn update(&self, id: i64, draft: &EntryDraft) -> Result<K::Model> {
        let entry = validate::<K>(draft)?;
        let cols = K::columns();
        let not_found = || Error::NotFound { kind: K::LABEL, id };

        let txn = self.db.begin().await?;
        ensure_unique::<K, _>(&txn, &entry, Some(id)).await?;

        let mut row = K::new_row(&entry, Utc::now());
        row.not_set(cols.owner_scope);
        row.not_set(cols.created_by);
        row.not_set(cols.created_at);

        let result = K::update_many()
            .set(row)
            .filter(cols.id.eq(id))
            .filter(cols.owner_scope.eq(entry.owner_scope))
            .exec(&txn)
            .await
            .map_err(|err| map_write_error::<K>(err, &entry))?;

        if result.rows_affected == 0 {
            return Err(not_found());
        }

        let updated = K::find()
            .filter(cols.id.eq(id))
            .one(&txn)
            .await?
            .ok_or_else(not_found)?;

        txn.commit().await?;
        Ok(updated)
    }

    /// Deletes entry `id`. Reports [`Error::NotFound`] when no row was removed.
    #[instrument(level = "debug", skip(self), fields(kind = K::LABEL))]
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = K::delete_many()
            .filter(K::columns().id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound { kind: K::LABEL, id });
        }
        Ok(())
    }

    /// Loads entry `id`.
    pub async fn get(&self, id: i64) -> Result<Option<K::Model>> {
        K::find()
            .filter(K::columns().id.eq(id))
            .one(self.db)
            .await
            .map_err(Into::into)
    }

    /// Loads the entry carrying `transaction_id`.
    pub async fn find_by_transaction_id(&self, transaction_id: &str) -> Result<Option<K::Model>> {
        K::find()
            .filter(K::columns().transaction_id.eq(transaction_id))
            .one(self.db)
            .await
            .map_err(Into::into)
    }

    /// Lists the entries of one owner scope and book, in sequence order.
    pub async fn list(&self, owner_scope: i64, book_type: &str) -> Result<Vec<K::Model>> {
        let book_type = allowed_book_type::<K>(book_type)?;
        let cols = K::columns();

        K::find()
            .filter(cols.owner_scope.eq(owner_scope))
            .filter(cols.book_type.eq(book_type.as_str()))
            .order_by_asc(cols.sequence_number)
            .all(self.db)
            .await
            .map_err(Into::into)
    }
}

/// Parses `value` and checks it against the kind's allowed book types.
pub fn allowed_book_type<K: EntryKind>(value: &str) -> Result<BookType> {
    BookType::parse(value)
        .filter(|book| K::BOOK_TYPES.contains(book))
        .ok_or_else(|| Error::InvalidBookType {
            kind: K::LABEL,
            book_type: value.to_string(),
        })
}

/// Runs every check that needs no store access, in the documented order.
pub fn validate<K: EntryKind>(draft: &EntryDraft) -> Result<ValidEntry<K::Fields>> {
    let present = draft.require_common()?;
    let fields = K::extract_fields(draft)?;
    let book_type = allowed_book_type::<K>(&present.book_type)?;
    transaction_id::validate(K::PREFIX, &present.transaction_id)?;

    if !present.amount.is_finite() || present.amount < 0.0 {
        return Err(Error::InvalidAmount {
            amount: present.amount,
        });
    }
    if present.sequence_number < 1 {
        return Err(Error::InvalidSequenceNumber {
            value: present.sequence_number,
        });
    }

    Ok(ValidEntry {
        transaction_id: present.transaction_id,
        sequence_number: present.sequence_number,
        owner_scope: present.owner_scope,
        book_type,
        date: present.date,
        amount: present.amount,
        user_id: present.user_id,
        fields,
    })
}

async fn transaction_id_taken<K, C>(
    db: &C,
    transaction_id: &str,
    exclude: Option<i64>,
) -> Result<bool>
where
    K: EntryKind,
    C: ConnectionTrait,
{
    let cols = K::columns();
    let mut query = K::find()
        .select_only()
        .column(cols.id)
        .filter(cols.transaction_id.eq(transaction_id));
    if let Some(id) = exclude {
        query = query.filter(cols.id.ne(id));
    }

    Ok(query.into_tuple::<i64>().one(db).await?.is_some())
}

async fn sequence_taken<K, C>(
    db: &C,
    owner_scope: i64,
    book_type: BookType,
    sequence_number: i64,
    exclude: Option<i64>,
) -> Result<bool>
where
    K: EntryKind,
    C: ConnectionTrait,
{
    let cols = K::columns();
    let mut query = K::find()
        .select_only()
        .column(cols.id)
        .filter(cols.owner_scope.eq(owner_scope))
        .filter(cols.book_type.eq(book_type.as_str()))
        .filter(cols.sequence_number.eq(sequence_number));
    if let Some(id) = exclude {
        query = query.filter(cols.id.ne(id));
    }

    Ok(query.into_tuple::<i64>().one(db).await?.is_some())
}

async fn ensure_unique<K, C>(
    db: &C,
    entry: &ValidEntry<K::Fields>,
    exclude: Option<i64>,
) -> Result<()>
where
    K: EntryKind,
    C: ConnectionTrait,
{
    if transaction_id_taken::<K, C>(db, &entry.transaction_id, exclude).await? {
        return Err(duplicate_transaction_id(entry));
    }
    if sequence_taken::<K, C>(
        db,
        entry.owner_scope,
        entry.book_type,
        entry.sequence_number,
        exclude,
    )
    .await?
    {
        return Err(duplicate_sequence::<K>(entry));
    }
    Ok(())
}

/// Maps a unique-index violation raised by the store to the matching conflict error.
///
/// SQLite names the violated columns in the message, so a message mentioning the
/// transaction id column is a transaction id clash and any other unique
/// violation on an entry table is the composite sequence index.
pub(crate) fn map_write_error<K: EntryKind>(err: DbErr, entry: &ValidEntry<K::Fields>) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            if message.contains(K::columns().transaction_id.as_str()) {
                duplicate_transaction_id(entry)
            } else {
                duplicate_sequence::<K>(entry)
            }
        }
        _ => Error::Database(err),
    }
}

fn duplicate_transaction_id<F>(entry: &ValidEntry<F>) -> Error {
    Error::DuplicateTransactionId {
        transaction_id: entry.transaction_id.clone(),
    }
}

fn duplicate_sequence<K: EntryKind>(entry: &ValidEntry<K::Fields>) -> Error {
    Error::DuplicateSequenceNumber {
        kind: K::LABEL,
        owner_scope: entry.owner_scope,
        book_type: entry.book_type.as_str().to_string(),
        sequence_number: entry.sequence_number,
    }
}
