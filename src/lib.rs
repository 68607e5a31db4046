//! `church-ledger` - transaction ids, sequence numbers and guarded writes for church ledgers
//!
//! This crate registers ledger entries (receipts, other credits, contra entries,
//! bill vouchers, acquittances and custom-book credits, debits and contras) for
//! a pastorate and its churches. Every entry gets a `PREFIX-XXXXX` transaction id unique in its table
//! and a sequence number unique within its owner scope and book.

#![deny(
    unsafe_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::unwrap_used,
    clippy::match_same_arms,
    rust_2018_idioms,
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

/// Command-line definitions
pub mod cli;
/// Dispatch of parsed commands to the registrar and lookups
pub mod commands;
/// Configuration management for database and application settings
pub mod config;
/// Core business logic - entry kinds, validation and the generic registrar
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Response envelope returned for every operation
pub mod response;

#[cfg(test)]
pub mod test_utils;
