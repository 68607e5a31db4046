//! Application configuration loaded from `church-ledger.toml`.
//!
//! The file holds the database location, registrar tuning and the lookup rows
//! (pastorates, churches, custom books, categories) seeded on `init`. Every
//! section is optional; a missing file at the default location yields the
//! defaults. `DATABASE_URL` in the environment (or `.env`) overrides the file.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Config file used when neither `--config` nor `CHURCH_LEDGER_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "church-ledger.toml";

/// Database used when nothing else is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/church_ledger.sqlite?mode=rwc";

/// Cap on transaction id collision retries.
pub const DEFAULT_MAX_ID_ATTEMPTS: u32 = 1000;

/// Configuration structure representing the entire config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Database connection settings
    pub database: DatabaseSettings,
    /// Registrar tuning
    pub registrar: RegistrarSettings,
    /// Pastorates to seed
    pub pastorates: Vec<PastorateSeed>,
    /// Churches to seed
    pub churches: Vec<ChurchSeed>,
    /// Custom books to seed
    pub custom_books: Vec<CustomBookSeed>,
    /// Categories to seed
    pub categories: Vec<CategorySeed>,
}

/// `[database]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// `SeaORM` connection URL
    pub url: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

/// `[registrar]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrarSettings {
    /// How many colliding transaction ids to draw before giving up
    pub max_id_attempts: u32,
}

impl Default for RegistrarSettings {
    fn default() -> Self {
        Self {
            max_id_attempts: DEFAULT_MAX_ID_ATTEMPTS,
        }
    }
}

/// `[[pastorates]]` entry
#[derive(Debug, Clone, Deserialize)]
pub struct PastorateSeed {
    /// Pastorate id
    pub id: i64,
    /// Display name
    pub name: String,
}

/// `[[churches]]` entry
#[derive(Debug, Clone, Deserialize)]
pub struct ChurchSeed {
    /// Church id, the owner scope of its receipts
    pub id: i64,
    /// Pastorate the church belongs to
    pub pastorate_id: i64,
    /// Display name
    pub name: String,
}

/// `[[custom_books]]` entry
#[derive(Debug, Clone, Deserialize)]
pub struct CustomBookSeed {
    /// Book id, the owner scope of its entries
    pub id: i64,
    /// Pastorate keeping the book
    pub pastorate_id: i64,
    /// Display name
    pub name: String,
}

/// `[[categories]]` entry
#[derive(Debug, Clone, Deserialize)]
pub struct CategorySeed {
    /// Category id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Entry kind label the category is offered for, e.g. `"receipt"`
    pub ledger: String,
}

/// Parses configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Resolves and loads the application configuration.
///
/// Lookup order for the file: `explicit` (from `--config`), then
/// `CHURCH_LEDGER_CONFIG`, then [`DEFAULT_CONFIG_PATH`]. An explicitly named
/// file must exist; a missing default file falls back to built-in defaults.
/// `DATABASE_URL` is applied last.
pub fn load_app_configuration(explicit: Option<&Path>) -> Result<AppConfig> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("CHURCH_LEDGER_CONFIG").map(PathBuf::from));

    let mut config = match named {
        Some(path) => load_config(&path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH)?,
        None => {
            info!("No config file found, using defaults.");
            AppConfig::default()
        }
    };

    apply_database_override(&mut config, std::env::var("DATABASE_URL").ok());
    Ok(config)
}

/// Replaces the configured database URL when `url` is set and not blank.
pub fn apply_database_override(config: &mut AppConfig, url: Option<String>) {
    if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
        debug!("DATABASE_URL overrides configured database.");
        config.database.url = url;
    }
}
