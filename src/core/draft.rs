//! Entry requests as submitted by the UI, and their validated forms.
//!
//! An [`EntryDraft`] is deliberately loose: every field is optional so that a
//! missing value can be reported as [`Error::MissingField`] instead of failing
//! deserialization. Validation turns it into a [`ValidEntry`] carrying the
//! common columns plus the kind-specific field set.

use crate::{
    core::book::BookType,
    errors::{Error, Result},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Create/update request for any entry kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryDraft {
    /// `PREFIX-XXXXX` identifier, usually obtained from the registrar first
    pub transaction_id: Option<String>,
    /// Receipt/credit/voucher number within the owner scope and book
    pub sequence_number: Option<i64>,
    /// Pastorate, church or custom book id
    pub owner_scope: Option<i64>,
    /// Sub-ledger name, e.g. `"cash"`
    pub book_type: Option<String>,
    /// Entry date
    pub date: Option<NaiveDate>,
    /// Entry amount
    pub amount: Option<f64>,
    /// Payer or payee name
    pub counterpart_name: Option<String>,
    /// Family the payment came from (receipts)
    pub family_id: Option<i64>,
    /// Ledger category
    pub category_id: Option<i64>,
    /// Ledger subcategory
    pub subcategory_id: Option<i64>,
    /// Free-text particulars
    pub notes: Option<String>,
    /// User submitting the request
    pub user_id: Option<String>,
}

/// Validated fields shared by every entry kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntry<F> {
    /// Format-checked transaction id
    pub transaction_id: String,
    /// Positive sequence number
    pub sequence_number: i64,
    /// Owning pastorate, church or custom book
    pub owner_scope: i64,
    /// Book type from the kind's allowed set
    pub book_type: BookType,
    /// Entry date
    pub date: NaiveDate,
    /// Finite, non-negative amount
    pub amount: f64,
    /// Submitting user
    pub user_id: String,
    /// Kind-specific fields
    pub fields: F,
}

/// Presence-checked common fields, before value validation.
#[derive(Debug, Clone)]
pub(crate) struct PresentFields {
    pub transaction_id: String,
    pub sequence_number: i64,
    pub owner_scope: i64,
    pub book_type: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub user_id: String,
}

fn require<T: Copy>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(Error::MissingField { field })
}

/// Present and not blank, returned exactly as submitted.
fn require_raw(value: Option<&String>, field: &'static str) -> Result<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .cloned()
        .ok_or(Error::MissingField { field })
}

fn require_text(value: Option<&String>, field: &'static str) -> Result<String> {
    optional_text(value).ok_or(Error::MissingField { field })
}

/// Trimmed text, with blank treated as absent.
fn optional_text(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl EntryDraft {
    /// Checks that every field all kinds require is present.
    pub(crate) fn require_common(&self) -> Result<PresentFields> {
        Ok(PresentFields {
            transaction_id: require_raw(self.transaction_id.as_ref(), "transactionId")?,
            sequence_number: require(self.sequence_number, "sequenceNumber")?,
            owner_scope: require(self.owner_scope, "ownerScope")?,
            book_type: require_raw(self.book_type.as_ref(), "bookType")?,
            date: require(self.date, "date")?,
            amount: require(self.amount, "amount")?,
            user_id: require_text(self.user_id.as_ref(), "userId")?,
        })
    }

    fn notes(&self) -> Option<String> {
        optional_text(self.notes.as_ref())
    }
}

/// Fields for kinds that always name a payer or payee: receipts, other credits,
/// bill vouchers and acquittances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterpartFields {
    /// Payer or payee name
    pub counterpart_name: String,
    /// Ledger category
    pub category_id: i64,
    /// Optional subcategory
    pub subcategory_id: Option<i64>,
    /// Optional family reference
    pub family_id: Option<i64>,
    /// Optional particulars
    pub notes: Option<String>,
}

impl CounterpartFields {
    /// Extracts and presence-checks the counterpart field set.
    pub fn from_draft(draft: &EntryDraft) -> Result<Self> {
        Ok(Self {
            counterpart_name: require_text(draft.counterpart_name.as_ref(), "counterpartName")?,
            category_id: require(draft.category_id, "categoryId")?,
            subcategory_id: draft.subcategory_id,
            family_id: draft.family_id,
            notes: draft.notes(),
        })
    }
}

/// Fields for contra transfers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContraFields {
    /// Contra head
    pub category_id: i64,
    /// Optional description of the other side
    pub counterpart_name: Option<String>,
    /// Optional particulars
    pub notes: Option<String>,
}

impl ContraFields {
    /// Extracts and presence-checks the contra field set.
    pub fn from_draft(draft: &EntryDraft) -> Result<Self> {
        Ok(Self {
            category_id: require(draft.category_id, "categoryId")?,
            counterpart_name: optional_text(draft.counterpart_name.as_ref()),
            notes: draft.notes(),
        })
    }
}

/// Fields for credits, debits and contras in a user-defined custom book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntryFields {
    /// Ledger category
    pub category_id: i64,
    /// Optional subcategory
    pub subcategory_id: Option<i64>,
    /// Optional payer or payee
    pub counterpart_name: Option<String>,
    /// Optional particulars
    pub notes: Option<String>,
}

impl BookEntryFields {
    /// Extracts and presence-checks the custom-book field set.
    pub fn from_draft(draft: &EntryDraft) -> Result<Self> {
        Ok(Self {
            category_id: require(draft.category_id, "categoryId")?,
            subcategory_id: draft.subcategory_id,
            counterpart_name: optional_text(draft.counterpart_name.as_ref()),
            notes: draft.notes(),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::receipt_draft;

    #[test]
    fn test_deserialize_camel_case_request() {
        let json = r#"{
            "transactionId": "RP-AB12C",
            "sequenceNumber": 1,
            "ownerScope": 7,
            "bookType": "cash",
            "date": "2026-03-01",
            "amount": 250.0,
            "counterpartName": "John Samuel",
            "categoryId": 3,
            "userId": "admin"
        }"#;
        let draft: EntryDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.transaction_id.as_deref(), Some("RP-AB12C"));
        assert_eq!(draft.owner_scope, Some(7));
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2026, 3, 1));
        assert_eq!(draft.family_id, None);
    }

    #[test]
    fn test_require_common_reports_first_missing_field() {
        let mut draft = receipt_draft("RP-AB12C", 1, 7, "cash");
        draft.amount = None;
        draft.date = None;
        assert!(matches!(
            draft.require_common(),
            Err(Error::MissingField { field: "date" })
        ));
    }

    #[test]
    fn test_blank_text_counts_as_missing() {
        let mut draft = receipt_draft("RP-AB12C", 1, 7, "cash");
        draft.counterpart_name = Some("   ".to_string());
        assert!(matches!(
            CounterpartFields::from_draft(&draft),
            Err(Error::MissingField {
                field: "counterpartName"
            })
        ));
    }

    #[test]
    fn test_counterpart_fields_trim() {
        let mut draft = receipt_draft("RP-AB12C", 1, 7, "cash");
        draft.counterpart_name = Some("  Mary  ".to_string());
        draft.notes = Some(String::new());
        let fields = CounterpartFields::from_draft(&draft).unwrap();
        assert_eq!(fields.counterpart_name, "Mary");
        assert_eq!(fields.notes, None);
    }

    #[test]
    fn test_transaction_id_kept_verbatim() {
        let draft = receipt_draft(" RP-AB12C ", 1, 7, "cash");
        let present = draft.require_common().unwrap();
        assert_eq!(present.transaction_id, " RP-AB12C ");

        let blank = receipt_draft("   ", 1, 7, "cash");
        assert!(matches!(
            blank.require_common(),
            Err(Error::MissingField {
                field: "transactionId"
            })
        ));
    }

    #[test]
    fn test_book_entry_fields_need_category_only() {
        let mut draft = receipt_draft("CD-AB12C", 1, 3, "cash");
        draft.counterpart_name = None;
        let fields = BookEntryFields::from_draft(&draft).unwrap();
        assert_eq!(fields.category_id, 10);
        assert_eq!(fields.counterpart_name, None);

        draft.category_id = None;
        assert!(matches!(
            BookEntryFields::from_draft(&draft),
            Err(Error::MissingField { field: "categoryId" })
        ));
    }
}
