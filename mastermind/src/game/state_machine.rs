//! Turn engine for one game of Mastermind.
//!
//! The engine owns the secret, the attempt and hint budgets, the guess
//! history, and the outcome, and is the only thing allowed to mutate
//! them. It processes one command at a time, synchronously; the single
//! async edge is the best-effort leaderboard write on a win.

use log::{error, info};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, sync::Arc};
use thiserror::Error;

use super::constants::{ATTEMPTS_MAX, SECRET_LEN};
use super::entities::{
    Difficulty, Digit, HistoryEntry, Outcome, PlayerName, ScoreResult, Secret,
};
use super::scorer;
use crate::db::repository::ResultRepository;
use crate::parser::{self, ParseError};

/// Errors a player command can produce. All of them are local and
/// recoverable: a rejected command mutates nothing and the engine keeps
/// accepting input (unless the game already ended).
#[derive(Debug, Error, Eq, PartialEq)]
pub enum EngineError {
    /// Malformed guess text. Re-prompt; no attempt is consumed.
    #[error(transparent)]
    InvalidGuess(#[from] ParseError),
    #[error("no hints left")]
    HintsExhausted,
    /// A hint must never be the move that exhausts the last attempt.
    #[error("too few attempts left to spend one on a hint")]
    TooFewAttemptsForHint,
    #[error("game is already over")]
    GameOver,
    #[error("invalid game state: {0}")]
    Internal(String),
}

/// Per-game configuration derived from the chosen difficulty.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub secret_len: usize,
    pub digit_min: Digit,
    pub digit_max: Digit,
    pub attempts_max: u8,
    pub hints_max: u8,
}

impl From<Difficulty> for GameSettings {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            secret_len: SECRET_LEN,
            digit_min: difficulty.digit_min(),
            digit_max: difficulty.digit_max(),
            attempts_max: ATTEMPTS_MAX,
            hints_max: difficulty.hints_max(),
        }
    }
}

/// Mutable state of one game, owned by the engine.
#[derive(Debug)]
struct GameData {
    secret: Secret,
    settings: GameSettings,
    attempts_remaining: u8,
    hints_used: u8,
    /// Digit values already shown to the player via hints.
    revealed_values: HashSet<Digit>,
    history: Vec<HistoryEntry>,
    outcome: Outcome,
}

/// What the engine reports back after a scored guess.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GuessReport {
    pub score: ScoreResult,
    pub outcome: Outcome,
    pub attempts_remaining: u8,
}

/// What the engine reports back after a granted hint. `revealed` is
/// `None` when every secret value was already shown; the hint is
/// consumed either way.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HintReport {
    pub revealed: Option<Digit>,
    pub attempts_remaining: u8,
    pub hints_remaining: u8,
}

/// State machine driving one game from start to a terminal outcome.
pub struct TurnEngine {
    data: GameData,
    player: PlayerName,
    store: Option<Arc<dyn ResultRepository>>,
}

impl TurnEngine {
    /// Starts a game in `InProgress` with full budgets.
    ///
    /// The secret must already satisfy the settings; providers
    /// guarantee this, so a mismatch here is a wiring bug.
    pub fn new(
        secret: Secret,
        player: PlayerName,
        settings: GameSettings,
        store: Option<Arc<dyn ResultRepository>>,
    ) -> Result<Self, EngineError> {
        if secret.len() != settings.secret_len {
            return Err(EngineError::Internal(format!(
                "secret has {} digits, settings require {}",
                secret.len(),
                settings.secret_len
            )));
        }
        if let Some(&digit) = secret
            .digits()
            .iter()
            .find(|&&d| d < settings.digit_min || d > settings.digit_max)
        {
            return Err(EngineError::Internal(format!(
                "secret digit {digit} outside {}-{}",
                settings.digit_min, settings.digit_max
            )));
        }

        Ok(Self {
            data: GameData {
                secret,
                settings,
                attempts_remaining: settings.attempts_max,
                hints_used: 0,
                revealed_values: HashSet::new(),
                history: Vec::with_capacity(settings.attempts_max as usize),
                outcome: Outcome::InProgress,
            },
            player,
            store,
        })
    }

    pub fn outcome(&self) -> Outcome {
        self.data.outcome
    }

    pub fn attempts_remaining(&self) -> u8 {
        self.data.attempts_remaining
    }

    pub fn hints_used(&self) -> u8 {
        self.data.hints_used
    }

    pub fn hints_remaining(&self) -> u8 {
        self.data.settings.hints_max - self.data.hints_used
    }

    pub fn settings(&self) -> &GameSettings {
        &self.data.settings
    }

    pub fn player(&self) -> &PlayerName {
        &self.player
    }

    /// The secret, for revealing after a loss. Callers showing this
    /// mid-game are cheating.
    pub fn secret(&self) -> &Secret {
        &self.data.secret
    }

    /// Ordered guess history; an entry's index is its attempt number.
    /// Read-only and side-effect free.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.data.history
    }

    /// Player-initiated abort. Terminal.
    pub fn quit(&mut self) -> Result<(), EngineError> {
        self.ensure_in_progress()?;
        self.data.outcome = Outcome::Aborted;
        info!("{} aborted the game", self.player);
        Ok(())
    }

    /// Reveal the earliest secret value (scanning left to right) not
    /// yet shown. Costs one hint and one attempt; rejected without any
    /// mutation when either budget would be violated.
    pub fn request_hint(&mut self) -> Result<HintReport, EngineError> {
        self.ensure_in_progress()?;
        if self.data.hints_used >= self.data.settings.hints_max {
            return Err(EngineError::HintsExhausted);
        }
        if self.data.attempts_remaining <= 1 {
            return Err(EngineError::TooFewAttemptsForHint);
        }

        let revealed = self
            .data
            .secret
            .digits()
            .iter()
            .copied()
            .find(|digit| !self.data.revealed_values.contains(digit));
        if let Some(digit) = revealed {
            self.data.revealed_values.insert(digit);
        }
        self.data.hints_used += 1;
        self.data.attempts_remaining -= 1;

        Ok(HintReport {
            revealed,
            attempts_remaining: self.data.attempts_remaining,
            hints_remaining: self.hints_remaining(),
        })
    }

    /// Validate and score one guess.
    ///
    /// Parse failures leave the game untouched. A full positional match
    /// wins and triggers the best-effort leaderboard write; otherwise
    /// one attempt is spent, and spending the last one loses.
    pub async fn submit_guess(&mut self, raw: &str) -> Result<GuessReport, EngineError> {
        self.ensure_in_progress()?;

        let settings = self.data.settings;
        let digits = parser::parse_guess(raw, settings.secret_len, settings.digit_min, settings.digit_max)?;
        let score = scorer::score(self.data.secret.digits(), &digits)
            .map_err(|err| EngineError::Internal(err.to_string()))?;

        self.data.history.push(HistoryEntry {
            guess: digits.into(),
            score,
        });

        if score.exact_matches == settings.secret_len {
            self.data.outcome = Outcome::Won;
            // Hints spend attempts but are not guesses, so the recorded
            // attempt count is the history length.
            let attempts_used = self.data.history.len();
            let first_try = attempts_used == 1;
            info!(
                "{} won in {attempts_used} attempt(s) on {}",
                self.player, settings.difficulty
            );
            self.record_win(attempts_used, first_try).await;
        } else {
            self.data.attempts_remaining -= 1;
            if self.data.attempts_remaining == 0 {
                self.data.outcome = Outcome::Lost;
                info!("{} ran out of attempts", self.player);
            }
        }

        Ok(GuessReport {
            score,
            outcome: self.data.outcome,
            attempts_remaining: self.data.attempts_remaining,
        })
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        if self.data.outcome.is_terminal() {
            return Err(EngineError::GameOver);
        }
        Ok(())
    }

    /// A store failure must never keep the player from seeing their
    /// win, so it only gets logged here.
    async fn record_win(&self, attempts_used: usize, first_try: bool) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(err) = store
            .record_win(
                self.player.as_str(),
                attempts_used as i64,
                self.data.settings.difficulty.label(),
                first_try,
            )
            .await
        {
            error!("failed to record win for {}: {err}", self.player);
        }
    }
}
