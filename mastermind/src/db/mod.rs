//! Leaderboard persistence over SQLite.
//!
//! This module manages the connection pool using sqlx and creates the
//! results schema on first use.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;

pub mod config;
pub mod repository;

pub use config::StoreConfig;
pub use repository::{LeaderboardRow, ResultRepository, SqliteResultRepository, StoreError};

/// Database connection pool wrapper
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if necessary) the store at the configured
    /// location and make sure the results table exists.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mastermind::db::{Database, StoreConfig};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), sqlx::Error> {
    ///     let db = Database::new(&StoreConfig::with_path("mastermind.db")).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn new(config: &StoreConfig) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_secs))
            .connect(&config.database_url)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS results (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                attempts INTEGER NOT NULL,
                difficulty TEXT NOT NULL,
                result TEXT NOT NULL,
                first_try_win INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check if the database connection is healthy
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the database connection pool
    pub async fn close(self) {
        self.pool.close().await;
    }
}
