//! Entry kinds - the per-ledger configuration the generic registrar runs on.
//!
//! Every ledger table has the same registrar-relevant shape (transaction id,
//! owner scope, book type, sequence number, audit columns) under different
//! column names. [`EntryKind`] names those columns for one table and supplies
//! the prefix, allowed book types and the kind-specific field extractor.

use crate::{
    core::{
        book::BookType,
        draft::{BookEntryFields, ContraFields, CounterpartFields, EntryDraft, ValidEntry},
        lookup::OwnerKind,
    },
    entities::{
        acquittance, bill_voucher, contra_entry, custom_book_contra, custom_book_credit,
        custom_book_debit, other_credit, receipt,
    },
    errors::Result,
};
use sea_orm::{EntityTrait, Set, prelude::DateTimeUtc};
use std::fmt::Debug;

/// Registrar-relevant columns of one entry table.
#[derive(Debug, Clone, Copy)]
pub struct EntryColumns<C> {
    /// Primary key
    pub id: C,
    /// Unique `PREFIX-XXXXX` code
    pub transaction_id: C,
    /// Pastorate, church or custom book id
    pub owner_scope: C,
    /// Sub-ledger
    pub book_type: C,
    /// Receipt/credit/voucher number
    pub sequence_number: C,
    /// Creating user, never rewritten
    pub created_by: C,
    /// Creation time, never rewritten
    pub created_at: C,
}

/// One ledger entry kind backed by its own table.
pub trait EntryKind: EntityTrait {
    /// Validated kind-specific fields.
    type Fields: Clone + Debug + PartialEq;

    /// Human label used in messages and category lookups, e.g. `"receipt"`.
    const LABEL: &'static str;
    /// Transaction id prefix, e.g. `"RP"`.
    const PREFIX: &'static str;
    /// Book types entries of this kind may be numbered in.
    const BOOK_TYPES: &'static [BookType];
    /// What the owner scope id refers to.
    const OWNER: OwnerKind;

    /// Column mapping for this table.
    fn columns() -> EntryColumns<Self::Column>;

    /// Presence-checks and extracts the kind-specific fields.
    fn extract_fields(draft: &EntryDraft) -> Result<Self::Fields>;

    /// Builds a row with every column set except the primary key.
    fn new_row(entry: &ValidEntry<Self::Fields>, now: DateTimeUtc) -> Self::ActiveModel;

    /// Primary key of a loaded row.
    fn row_id(model: &Self::Model) -> i64;
}

impl EntryKind for receipt::Entity {
    type Fields = CounterpartFields;

    const LABEL: &'static str = "receipt";
    const PREFIX: &'static str = "RP";
    const BOOK_TYPES: &'static [BookType] = &[BookType::Cash, BookType::Bank];
    const OWNER: OwnerKind = OwnerKind::Church;

    fn columns() -> EntryColumns<Self::Column> {
        use receipt::Column;
        EntryColumns {
            id: Column::Id,
            transaction_id: Column::TransactionId,
            owner_scope: Column::ChurchId,
            book_type: Column::BookType,
            sequence_number: Column::ReceiptNumber,
            created_by: Column::CreatedBy,
            created_at: Column::CreatedAt,
        }
    }

    fn extract_fields(draft: &EntryDraft) -> Result<Self::Fields> {
        CounterpartFields::from_draft(draft)
    }

    fn new_row(entry: &ValidEntry<Self::Fields>, now: DateTimeUtc) -> receipt::ActiveModel {
        receipt::ActiveModel {
            transaction_id: Set(entry.transaction_id.clone()),
            church_id: Set(entry.owner_scope),
            book_type: Set(entry.book_type.as_str().to_string()),
            receipt_number: Set(entry.sequence_number),
            receipt_date: Set(entry.date),
            amount: Set(entry.amount),
            payer_name: Set(entry.fields.counterpart_name.clone()),
            family_id: Set(entry.fields.family_id),
            category_id: Set(entry.fields.category_id),
            subcategory_id: Set(entry.fields.subcategory_id),
            notes: Set(entry.fields.notes.clone()),
            created_by: Set(entry.user_id.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn row_id(model: &receipt::Model) -> i64 {
        model.id
    }
}

impl EntryKind for other_credit::Entity {
    type Fields = CounterpartFields;

    const LABEL: &'static str = "other credit";
    const PREFIX: &'static str = "OC";
    const BOOK_TYPES: &'static [BookType] = &[BookType::Cash, BookType::Bank, BookType::Diocese];
    const OWNER: OwnerKind = OwnerKind::Pastorate;

    fn columns() -> EntryColumns<Self::Column> {
        use other_credit::Column;
        EntryColumns {
            id: Column::Id,
            transaction_id: Column::TransactionId,
            owner_scope: Column::PastorateId,
            book_type: Column::BookType,
            sequence_number: Column::CreditNumber,
            created_by: Column::CreatedBy,
            created_at: Column::CreatedAt,
        }
    }

    fn extract_fields(draft: &EntryDraft) -> Result<Self::Fields> {
        CounterpartFields::from_draft(draft)
    }

    fn new_row(entry: &ValidEntry<Self::Fields>, now: DateTimeUtc) -> other_credit::ActiveModel {
        other_credit::ActiveModel {
            transaction_id: Set(entry.transaction_id.clone()),
            pastorate_id: Set(entry.owner_scope),
            book_type: Set(entry.book_type.as_str().to_string()),
            credit_number: Set(entry.sequence_number),
            credit_date: Set(entry.date),
            amount: Set(entry.amount),
            payer_name: Set(entry.fields.counterpart_name.clone()),
            category_id: Set(entry.fields.category_id),
            subcategory_id: Set(entry.fields.subcategory_id),
            notes: Set(entry.fields.notes.clone()),
            created_by: Set(entry.user_id.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn row_id(model: &other_credit::Model) -> i64 {
        model.id
    }
}

impl EntryKind for contra_entry::Entity {
    type Fields = ContraFields;

    const LABEL: &'static str = "contra";
    const PREFIX: &'static str = "CT";
    const BOOK_TYPES: &'static [BookType] = &[
        BookType::Cash,
        BookType::Bank,
        BookType::Diocese,
        BookType::All,
    ];
    const OWNER: OwnerKind = OwnerKind::Pastorate;

    fn columns() -> EntryColumns<Self::Column> {
        use contra_entry::Column;
        EntryColumns {
            id: Column::Id,
            transaction_id: Column::TransactionId,
            owner_scope: Column::PastorateId,
            book_type: Column::BookType,
            sequence_number: Column::ContraNumber,
            created_by: Column::CreatedBy,
            created_at: Column::CreatedAt,
        }
    }

    fn extract_fields(draft: &EntryDraft) -> Result<Self::Fields> {
        ContraFields::from_draft(draft)
    }

    fn new_row(entry: &ValidEntry<Self::Fields>, now: DateTimeUtc) -> contra_entry::ActiveModel {
        contra_entry::ActiveModel {
            transaction_id: Set(entry.transaction_id.clone()),
            pastorate_id: Set(entry.owner_scope),
            book_type: Set(entry.book_type.as_str().to_string()),
            contra_number: Set(entry.sequence_number),
            contra_date: Set(entry.date),
            amount: Set(entry.amount),
            category_id: Set(entry.fields.category_id),
            counterpart_name: Set(entry.fields.counterpart_name.clone()),
            notes: Set(entry.fields.notes.clone()),
            created_by: Set(entry.user_id.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn row_id(model: &contra_entry::Model) -> i64 {
        model.id
    }
}

impl EntryKind for bill_voucher::Entity {
    type Fields = CounterpartFields;

    const LABEL: &'static str = "bill voucher";
    const PREFIX: &'static str = "BV";
    const BOOK_TYPES: &'static [BookType] = &[BookType::Cash, BookType::Bank, BookType::Diocese];
    const OWNER: OwnerKind = OwnerKind::Pastorate;

    fn columns() -> EntryColumns<Self::Column> {
        use bill_voucher::Column;
        EntryColumns {
            id: Column::Id,
            transaction_id: Column::TransactionId,
            owner_scope: Column::PastorateId,
            book_type: Column::BookType,
            sequence_number: Column::VoucherNumber,
            created_by: Column::CreatedBy,
            created_at: Column::CreatedAt,
        }
    }

    fn extract_fields(draft: &EntryDraft) -> Result<Self::Fields> {
        CounterpartFields::from_draft(draft)
    }

    fn new_row(entry: &ValidEntry<Self::Fields>, now: DateTimeUtc) -> bill_voucher::ActiveModel {
        bill_voucher::ActiveModel {
            transaction_id: Set(entry.transaction_id.clone()),
            pastorate_id: Set(entry.owner_scope),
            book_type: Set(entry.book_type.as_str().to_string()),
            voucher_number: Set(entry.sequence_number),
            voucher_date: Set(entry.date),
            amount: Set(entry.amount),
            payee_name: Set(entry.fields.counterpart_name.clone()),
            category_id: Set(entry.fields.category_id),
            subcategory_id: Set(entry.fields.subcategory_id),
            notes: Set(entry.fields.notes.clone()),
            created_by: Set(entry.user_id.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn row_id(model: &bill_voucher::Model) -> i64 {
        model.id
    }
}

impl EntryKind for acquittance::Entity {
    type Fields = CounterpartFields;

    const LABEL: &'static str = "acquittance";
    const PREFIX: &'static str = "AQ";
    const BOOK_TYPES: &'static [BookType] = &[BookType::Cash, BookType::Bank, BookType::Diocese];
    const OWNER: OwnerKind = OwnerKind::Pastorate;

    fn columns() -> EntryColumns<Self::Column> {
        use acquittance::Column;
        EntryColumns {
            id: Column::Id,
            transaction_id: Column::TransactionId,
            owner_scope: Column::PastorateId,
            book_type: Column::BookType,
            sequence_number: Column::AcquittanceNumber,
            created_by: Column::CreatedBy,
            created_at: Column::CreatedAt,
        }
    }

    fn extract_fields(draft: &EntryDraft) -> Result<Self::Fields> {
        CounterpartFields::from_draft(draft)
    }

    fn new_row(entry: &ValidEntry<Self::Fields>, now: DateTimeUtc) -> acquittance::ActiveModel {
        acquittance::ActiveModel {
            transaction_id: Set(entry.transaction_id.clone()),
            pastorate_id: Set(entry.owner_scope),
            book_type: Set(entry.book_type.as_str().to_string()),
            acquittance_number: Set(entry.sequence_number),
            payment_date: Set(entry.date),
            amount: Set(entry.amount),
            payee_name: Set(entry.fields.counterpart_name.clone()),
            category_id: Set(entry.fields.category_id),
            subcategory_id: Set(entry.fields.subcategory_id),
            notes: Set(entry.fields.notes.clone()),
            created_by: Set(entry.user_id.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }

    fn row_id(model: &acquittance::Model) -> i64 {
        model.id
    }
}

/// Custom-book credits, debits and contras share one shape; each is its own
/// kind with its own table, prefix and numbering.
macro_rules! custom_book_kind {
    ($module:ident, $label:literal, $prefix:literal) => {
        impl EntryKind for $module::Entity {
            type Fields = BookEntryFields;

            const LABEL: &'static str = $label;
            const PREFIX: &'static str = $prefix;
            const BOOK_TYPES: &'static [BookType] = &[BookType::Cash, BookType::Bank];
            const OWNER: OwnerKind = OwnerKind::CustomBook;

            fn columns() -> EntryColumns<Self::Column> {
                use $module::Column;
                EntryColumns {
                    id: Column::Id,
                    transaction_id: Column::TransactionId,
                    owner_scope: Column::BookId,
                    book_type: Column::BookType,
                    sequence_number: Column::VoucherNumber,
                    created_by: Column::CreatedBy,
                    created_at: Column::CreatedAt,
                }
            }

            fn extract_fields(draft: &EntryDraft) -> Result<Self::Fields> {
                BookEntryFields::from_draft(draft)
            }

            fn new_row(
                entry: &ValidEntry<Self::Fields>,
                now: DateTimeUtc,
            ) -> $module::ActiveModel {
                $module::ActiveModel {
                    transaction_id: Set(entry.transaction_id.clone()),
                    book_id: Set(entry.owner_scope),
                    book_type: Set(entry.book_type.as_str().to_string()),
                    voucher_number: Set(entry.sequence_number),
                    entry_date: Set(entry.date),
                    amount: Set(entry.amount),
                    category_id: Set(entry.fields.category_id),
                    subcategory_id: Set(entry.fields.subcategory_id),
                    counterpart_name: Set(entry.fields.counterpart_name.clone()),
                    notes: Set(entry.fields.notes.clone()),
                    created_by: Set(entry.user_id.clone()),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
            }

            fn row_id(model: &$module::Model) -> i64 {
                model.id
            }
        }
    };
}

custom_book_kind!(custom_book_credit, "custom book credit", "CC");
custom_book_kind!(custom_book_debit, "custom book debit", "CD");
custom_book_kind!(custom_book_contra, "custom book contra", "CX");
