/// Database connection and table creation
pub mod database;

/// Application settings and lookup seeds from `church-ledger.toml`
pub mod settings;
