use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use super::constants;

/// Placeholder for digit values.
pub type Digit = u8;

/// The hidden digit sequence the player must deduce. Immutable once
/// drawn; may contain repeated values.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Secret(Vec<Digit>);

impl Secret {
    #[must_use]
    pub fn new(digits: Vec<Digit>) -> Self {
        Self(digits)
    }

    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{repr}")
    }
}

/// One player-submitted candidate sequence, already validated against
/// the game's length and digit range.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Guess(Vec<Digit>);

impl Guess {
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.0
    }
}

impl From<Vec<Digit>> for Guess {
    fn from(digits: Vec<Digit>) -> Self {
        Self(digits)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{repr}")
    }
}

/// Feedback for one scored guess.
///
/// A positionally-exact digit counts toward both numbers, so
/// `exact_matches <= total_matches` always holds.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Guess values equal to the secret value at the same index.
    pub exact_matches: usize,
    /// Values shared between guess and secret under multiset
    /// intersection, independent of position.
    pub total_matches: usize,
}

impl ScoreResult {
    #[must_use]
    pub fn is_all_incorrect(&self) -> bool {
        self.exact_matches == 0 && self.total_matches == 0
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all_incorrect() {
            write!(f, "all incorrect")
        } else {
            write!(
                f,
                "{} correct number and {} correct location",
                self.total_matches, self.exact_matches
            )
        }
    }
}

/// One scored attempt. History entries are appended in submission order
/// and never removed, so an entry's index is its attempt number.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub guess: Guess,
    pub score: ScoreResult,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.guess, self.score)
    }
}

/// Where a game stands. The three non-`InProgress` values are terminal.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
    Aborted,
}

impl Outcome {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Difficulty selects the digit range and hint budget; the secret
/// length and attempt budget are fixed across difficulties.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Difficulty {
    Normal,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub const fn digit_min(&self) -> Digit {
        constants::DIGIT_MIN
    }

    #[must_use]
    pub const fn digit_max(&self) -> Digit {
        match self {
            Self::Normal => constants::NORMAL_DIGIT_MAX,
            Self::Hard => constants::HARD_DIGIT_MAX,
        }
    }

    #[must_use]
    pub const fn hints_max(&self) -> u8 {
        match self {
            Self::Normal => constants::NORMAL_HINTS_MAX,
            Self::Hard => constants::HARD_HINTS_MAX,
        }
    }

    /// Label stored alongside leaderboard rows.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
#[error("unknown difficulty {0:?}, expected \"normal\" or \"hard\"")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "n" => Ok(Self::Normal),
            "hard" | "h" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Name recorded on the leaderboard. Whitespace collapses to
/// underscores and overly long names are truncated.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(s: &str) -> Self {
        // Truncation counts characters, not bytes, so multibyte names
        // can't split a char.
        let mut name: String = s
            .trim()
            .chars()
            .map(|c| if c.is_ascii_whitespace() { '_' } else { c })
            .take(constants::MAX_PLAYER_NAME_LEN)
            .collect();
        if name.is_empty() {
            name.push_str("anonymous");
        }
        Self(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_name_sanitizes_whitespace() {
        let name = PlayerName::new("  ada lovelace ");
        assert_eq!(name.as_str(), "ada_lovelace");
    }

    #[test]
    fn player_name_truncates() {
        let name = PlayerName::new("abcdefghijklmnopqrstuvwxyz");
        assert_eq!(name.as_str().len(), constants::MAX_PLAYER_NAME_LEN);
    }

    #[test]
    fn player_name_truncates_multibyte_names_on_char_boundaries() {
        // Two bytes per é puts the byte cutoff mid-character; counting
        // characters keeps this from panicking.
        let name = PlayerName::new("aééééééééééééééééééé");
        assert_eq!(
            name.as_str().chars().count(),
            constants::MAX_PLAYER_NAME_LEN
        );
        assert!(name.as_str().starts_with("aé"));
    }

    #[test]
    fn empty_player_name_gets_placeholder() {
        assert_eq!(PlayerName::new("   ").as_str(), "anonymous");
    }

    #[test]
    fn difficulty_parses_labels_and_shorthand() {
        assert_eq!("normal".parse::<Difficulty>(), Ok(Difficulty::Normal));
        assert_eq!("H".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("brutal".parse::<Difficulty>().is_err());
    }

    #[test]
    fn score_display_matches_game_feedback() {
        let miss = ScoreResult {
            exact_matches: 0,
            total_matches: 0,
        };
        assert_eq!(miss.to_string(), "all incorrect");

        let partial = ScoreResult {
            exact_matches: 2,
            total_matches: 3,
        };
        assert_eq!(
            partial.to_string(),
            "3 correct number and 2 correct location"
        );
    }
}
