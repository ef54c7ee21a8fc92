//! # Mastermind
//!
//! A turn-based code-breaking game engine: a secret digit sequence is
//! drawn, the player submits guesses, and feedback distinguishes
//! "correct digit, correct position" from "correct digit, wrong
//! position" across a bounded number of attempts, with optional hints.
//!
//! ## Architecture
//!
//! The core is the guessing engine:
//!
//! - **Scorer**: a pure function comparing a guess to the secret under
//!   multiset semantics
//! - **Turn engine**: the state machine owning one game's lifecycle
//!   (`InProgress` -> `Won`/`Lost`/`Aborted`)
//!
//! Around it sit the collaborators the engine consumes:
//!
//! - [`parser`]: free-form guess text validation
//! - [`providers`]: secret acquisition from RANDOM.ORG with a local
//!   CSPRNG fallback
//! - [`db`]: the SQLite-backed leaderboard store
//!
//! ## Example
//!
//! ```
//! use mastermind::{
//!     Difficulty, GameSettings, Outcome, PlayerName, Secret, TurnEngine,
//! };
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut engine = TurnEngine::new(
//!     Secret::new(vec![0, 1, 3, 5]),
//!     PlayerName::new("alice"),
//!     GameSettings::from(Difficulty::Normal),
//!     None,
//! )
//! .unwrap();
//!
//! let report = engine.submit_guess("0 1 5 6").await.unwrap();
//! assert_eq!(report.score.exact_matches, 2);
//! assert_eq!(report.score.total_matches, 3);
//! assert_eq!(report.outcome, Outcome::InProgress);
//! # }
//! ```

/// Core game logic: scorer, entities, and the turn state machine.
pub mod game;
pub use game::{
    constants::{self, ATTEMPTS_MAX, LEADERBOARD_LIMIT, SECRET_LEN},
    entities::{
        Difficulty, Digit, Guess, HistoryEntry, Outcome, PlayerName, ScoreResult, Secret,
    },
    scorer,
    state_machine::{EngineError, GameSettings, GuessReport, HintReport, TurnEngine},
};

/// Free-form guess text validation.
pub mod parser;
pub use parser::ParseError;

/// Secret acquisition (remote service with local fallback).
pub mod providers;
pub use providers::{SecretProvider, SecretSource};

/// Leaderboard persistence.
pub mod db;
pub use db::{Database, LeaderboardRow, ResultRepository, SqliteResultRepository, StoreConfig};
