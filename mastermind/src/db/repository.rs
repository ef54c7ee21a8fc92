//! Repository trait for the leaderboard store.
//!
//! The trait abstraction keeps the turn engine testable: the engine
//! only sees `ResultRepository`, and tests swap in the in-memory mock.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, sqlite::SqlitePool};
use thiserror::Error;

/// Leaderboard store failures. These are best-effort from the game's
/// point of view: a failed write is reported, never fatal.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("leaderboard database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// One row of the best-attempts leaderboard.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeaderboardRow {
    pub name: String,
    pub attempts_used: i64,
    pub difficulty_label: String,
}

/// Trait for recording finished games and reading the leaderboard
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// Persist one won game. Only wins are stored.
    async fn record_win(
        &self,
        name: &str,
        attempts_used: i64,
        difficulty_label: &str,
        first_try: bool,
    ) -> StoreResult<()>;

    /// Best recorded wins: fewest attempts first, earliest recording
    /// time breaking ties.
    async fn top_by_fewest_attempts(&self, limit: i64) -> StoreResult<Vec<LeaderboardRow>>;
}

/// Default SQLite implementation of `ResultRepository`
pub struct SqliteResultRepository {
    pool: SqlitePool,
}

impl SqliteResultRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultRepository for SqliteResultRepository {
    async fn record_win(
        &self,
        name: &str,
        attempts_used: i64,
        difficulty_label: &str,
        first_try: bool,
    ) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO results (name, attempts, difficulty, result, first_try_win, created_at)
             VALUES (?, ?, ?, 'win', ?, ?)",
        )
        .bind(name)
        .bind(attempts_used)
        .bind(difficulty_label)
        .bind(i64::from(first_try))
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn top_by_fewest_attempts(&self, limit: i64) -> StoreResult<Vec<LeaderboardRow>> {
        let rows = sqlx::query(
            "SELECT name, attempts, difficulty
             FROM results
             WHERE result = 'win'
             ORDER BY attempts ASC, created_at ASC
             LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| LeaderboardRow {
                name: r.get("name"),
                attempts_used: r.get("attempts"),
                difficulty_label: r.get("difficulty"),
            })
            .collect())
    }
}
