//! Result store configuration.
//!
//! The database location is an explicit value injected at construction
//! rather than a module-level path constant.

use std::env;

/// SQLite store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// SQLite connection URL
    pub database_url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,
}

impl StoreConfig {
    /// Create configuration from environment variables
    ///
    /// Expected environment variables:
    /// - `MASTERMIND_DB_URL`: SQLite connection string (default: `sqlite://mastermind.db?mode=rwc`)
    /// - `MASTERMIND_DB_MAX_CONNECTIONS`: Maximum pool size (default: 2)
    /// - `MASTERMIND_DB_CONNECTION_TIMEOUT`: Connection timeout in seconds (default: 5)
    ///
    /// # Panics
    ///
    /// Panics if a set variable fails to parse.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            database_url: env::var("MASTERMIND_DB_URL").unwrap_or(defaults.database_url),
            max_connections: env::var("MASTERMIND_DB_MAX_CONNECTIONS")
                .map(|v| {
                    v.parse()
                        .expect("MASTERMIND_DB_MAX_CONNECTIONS must be a valid u32")
                })
                .unwrap_or(defaults.max_connections),
            connection_timeout_secs: env::var("MASTERMIND_DB_CONNECTION_TIMEOUT")
                .map(|v| {
                    v.parse()
                        .expect("MASTERMIND_DB_CONNECTION_TIMEOUT must be a valid u64")
                })
                .unwrap_or(defaults.connection_timeout_secs),
        }
    }

    /// Configuration pointing at an explicit database file path.
    pub fn with_path(path: &str) -> Self {
        Self {
            // mode=rwc creates the file on first open
            database_url: format!("sqlite://{path}?mode=rwc"),
            ..Self::default()
        }
    }

    /// In-memory store, used by integration tests.
    ///
    /// Pinned to a single connection: every connection to
    /// `sqlite::memory:` opens its own private database.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..Self::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://mastermind.db?mode=rwc".to_string(),
            max_connections: 2,
            connection_timeout_secs: 5,
        }
    }
}
