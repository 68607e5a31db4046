//! Command-line definitions for the `church-ledger` binary.

use crate::{
    core::{EntryDraft, EntryKind, lookup::OwnerKind},
    entities::{
        Acquittance, BillVoucher, ContraEntry, CustomBookContra, CustomBookCredit,
        CustomBookDebit, OtherCredit, Receipt,
    },
    errors::{Error, Result},
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Church ledger - transaction ids, sequence numbers and guarded ledger writes
#[derive(Debug, Parser)]
#[command(name = "church-ledger")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file (default: church-ledger.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Ledger the command operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LedgerKind {
    /// Church receipts (`RP`)
    Receipt,
    /// Pastorate other credits (`OC`)
    OtherCredit,
    /// Pastorate contra entries (`CT`)
    Contra,
    /// Pastorate bill vouchers (`BV`)
    BillVoucher,
    /// Pastorate acquittances (`AQ`)
    Acquittance,
    /// Custom-book credits (`CC`)
    BookCredit,
    /// Custom-book debits (`CD`)
    BookDebit,
    /// Custom-book contras (`CX`)
    BookContra,
}

impl LedgerKind {
    /// Label of the entry kind, as used for category lookups.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Receipt => Receipt::LABEL,
            Self::OtherCredit => OtherCredit::LABEL,
            Self::Contra => ContraEntry::LABEL,
            Self::BillVoucher => BillVoucher::LABEL,
            Self::Acquittance => Acquittance::LABEL,
            Self::BookCredit => CustomBookCredit::LABEL,
            Self::BookDebit => CustomBookDebit::LABEL,
            Self::BookContra => CustomBookContra::LABEL,
        }
    }

    /// What owner scope ids of this ledger refer to.
    pub const fn owner(self) -> OwnerKind {
        match self {
            Self::Receipt => Receipt::OWNER,
            Self::OtherCredit => OtherCredit::OWNER,
            Self::Contra => ContraEntry::OWNER,
            Self::BillVoucher => BillVoucher::OWNER,
            Self::Acquittance => Acquittance::OWNER,
            Self::BookCredit => CustomBookCredit::OWNER,
            Self::BookDebit => CustomBookDebit::OWNER,
            Self::BookContra => CustomBookContra::OWNER,
        }
    }
}

/// Subcommands; each prints one JSON response on stdout.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create missing tables and seed lookup rows from the config file
    Init,

    /// Issue a transaction id not yet used in the ledger
    GenerateId {
        /// Ledger to issue the id for
        #[arg(value_enum)]
        kind: LedgerKind,
    },

    /// Suggest the next sequence number for an owner scope and book
    NextNumber {
        /// Ledger to number
        #[arg(value_enum)]
        kind: LedgerKind,
        /// Pastorate, church or custom book id
        #[arg(long)]
        scope: i64,
        /// Book type, e.g. cash
        #[arg(long)]
        book: String,
    },

    /// Validate and record a new entry
    Create {
        /// Ledger to write to
        #[arg(value_enum)]
        kind: LedgerKind,
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Validate and rewrite an existing entry
    Update {
        /// Ledger to write to
        #[arg(value_enum)]
        kind: LedgerKind,
        /// Row id of the entry
        #[arg(long)]
        id: i64,
        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Delete an entry
    Delete {
        /// Ledger to delete from
        #[arg(value_enum)]
        kind: LedgerKind,
        /// Row id of the entry
        #[arg(long)]
        id: i64,
    },

    /// Show one entry by row id or transaction id
    Show {
        /// Ledger to read
        #[arg(value_enum)]
        kind: LedgerKind,
        /// Row id of the entry
        #[arg(long, conflicts_with = "transaction_id", required_unless_present = "transaction_id")]
        id: Option<i64>,
        /// Transaction id, e.g. RP-AB12C
        #[arg(long)]
        transaction_id: Option<String>,
    },

    /// List the entries of one owner scope and book in number order
    List {
        /// Ledger to read
        #[arg(value_enum)]
        kind: LedgerKind,
        /// Pastorate, church or custom book id
        #[arg(long)]
        scope: i64,
        /// Book type, e.g. cash
        #[arg(long)]
        book: String,
    },

    /// Search a church's family register by head name or family number
    Families {
        /// Church id
        #[arg(long)]
        church: i64,
        /// Part of the head name or family number
        #[arg(long, default_value = "")]
        query: String,
        /// Maximum number of results
        #[arg(long, default_value_t = 25)]
        limit: u64,
    },

    /// List the categories offered for a ledger
    Categories {
        /// Ledger to list categories for
        #[arg(value_enum)]
        kind: LedgerKind,
    },
}

/// Where an entry payload comes from.
#[derive(Debug, Args)]
pub struct PayloadArgs {
    /// Entry as a JSON object
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub json: Option<String>,

    /// File holding the entry as a JSON object
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl PayloadArgs {
    /// Reads and parses the payload into an [`EntryDraft`].
    pub fn read_draft(&self) -> Result<EntryDraft> {
        let text = match (&self.json, &self.file) {
            (Some(json), _) => json.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => {
                return Err(Error::Config {
                    message: "an entry payload is required (--json or --file)".to_string(),
                });
            }
        };
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_create_with_json() {
        let cli = Cli::try_parse_from([
            "church-ledger",
            "create",
            "receipt",
            "--json",
            r#"{"transactionId":"RP-AB12C","ownerScope":7}"#,
        ])
        .unwrap();

        let Command::Create { kind, payload } = cli.command else {
            panic!("expected create");
        };
        assert_eq!(kind, LedgerKind::Receipt);
        let draft = payload.read_draft().unwrap();
        assert_eq!(draft.transaction_id.as_deref(), Some("RP-AB12C"));
        assert_eq!(draft.owner_scope, Some(7));
    }

    #[test]
    fn test_parse_kind_names() {
        let cli = Cli::try_parse_from([
            "church-ledger",
            "next-number",
            "other-credit",
            "--scope",
            "1",
            "--book",
            "diocese",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::NextNumber {
                kind: LedgerKind::OtherCredit,
                scope: 1,
                ..
            }
        ));
        assert_eq!(LedgerKind::BookDebit.label(), "custom book debit");
        assert_eq!(LedgerKind::BookContra.owner(), OwnerKind::CustomBook);
        assert_eq!(LedgerKind::Receipt.owner(), OwnerKind::Church);
    }

    #[test]
    fn test_show_requires_an_identifier() {
        assert!(Cli::try_parse_from(["church-ledger", "show", "contra"]).is_err());
        assert!(
            Cli::try_parse_from(["church-ledger", "show", "contra", "--id", "1"]).is_ok()
        );
    }

    #[test]
    fn test_bad_payload_is_json_error() {
        let payload = PayloadArgs {
            json: Some("{not json".to_string()),
            file: None,
        };
        assert!(matches!(payload.read_draft(), Err(Error::Json(_))));
    }
}
