//! Core business logic - entry kinds, validation, the generic registrar and lookups.
//! Everything here is framework-agnostic and talks to the store through `SeaORM`.

/// Book types
pub mod book;
/// Entry requests and their validated forms
pub mod draft;
/// Per-ledger configuration for the registrar
pub mod kind;
/// Read-only lookups and seeding of collaborating tables
pub mod lookup;
/// Transaction id issuance, sequence numbering and guarded writes
pub mod registrar;
/// `PREFIX-XXXXX` generation and format checks
pub mod transaction_id;

pub use book::BookType;
pub use draft::{EntryDraft, ValidEntry};
pub use kind::{EntryColumns, EntryKind};
pub use registrar::Registrar;
