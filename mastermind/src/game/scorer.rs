//! Feedback scoring for one guess against the secret.
//!
//! Pure and deterministic. `total_matches` follows the multiset
//! convention: every shared value occurrence counts, capped by the
//! lesser multiplicity on each side, and exact hits are NOT subtracted
//! from it. A digit in the right place therefore contributes to both
//! numbers.

use std::collections::HashMap;
use thiserror::Error;

use super::entities::{Digit, ScoreResult};

/// The turn engine guarantees equal lengths after parsing, so hitting
/// this is a caller bug rather than user error.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ScoreError {
    #[error("secret has {secret_len} digits but guess has {guess_len}")]
    LengthMismatch { secret_len: usize, guess_len: usize },
    #[error("can't score an empty sequence")]
    Empty,
}

/// Compares `guess` to `secret` and returns the exact/total match pair.
///
/// `exact_matches` counts positional coincidences. `total_matches` is
/// `sum over v of min(count(v in secret), count(v in guess))`: the
/// frequency pool is built from the full secret (exact positions
/// included) and each guess digit, scanned left to right, consumes one
/// unit of its value's remaining count.
pub fn score(secret: &[Digit], guess: &[Digit]) -> Result<ScoreResult, ScoreError> {
    if secret.len() != guess.len() {
        return Err(ScoreError::LengthMismatch {
            secret_len: secret.len(),
            guess_len: guess.len(),
        });
    }
    if secret.is_empty() {
        return Err(ScoreError::Empty);
    }

    let exact_matches = secret
        .iter()
        .zip(guess.iter())
        .filter(|(s, g)| s == g)
        .count();

    let mut remaining: HashMap<Digit, usize> = HashMap::with_capacity(secret.len());
    for &digit in secret {
        *remaining.entry(digit).or_insert(0) += 1;
    }

    let mut total_matches = 0;
    for digit in guess {
        if let Some(count) = remaining.get_mut(digit)
            && *count > 0
        {
            *count -= 1;
            total_matches += 1;
        }
    }

    Ok(ScoreResult {
        exact_matches,
        total_matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(secret: &[Digit], guess: &[Digit], exact: usize, total: usize) {
        let result = score(secret, guess).unwrap();
        assert_eq!(result.exact_matches, exact, "exact for guess {guess:?}");
        assert_eq!(result.total_matches, total, "total for guess {guess:?}");
    }

    #[test]
    fn all_incorrect() {
        check(&[0, 1, 3, 5], &[2, 2, 4, 6], 0, 0);
        assert!(score(&[0, 1, 3, 5], &[2, 2, 4, 6]).unwrap().is_all_incorrect());
    }

    #[test]
    fn one_number_one_location() {
        check(&[0, 1, 3, 5], &[0, 2, 4, 6], 1, 1);
    }

    #[test]
    fn one_number_zero_location() {
        check(&[0, 1, 3, 5], &[2, 2, 1, 1], 0, 1);
    }

    #[test]
    fn three_numbers_two_locations() {
        check(&[0, 1, 3, 5], &[0, 1, 5, 6], 2, 3);
    }

    #[test]
    fn duplicates_capped_by_secret_multiplicity() {
        // The secret holds two 1's, so only two of the guess's three
        // 1's are credited. The 2 matches out of place.
        check(&[1, 1, 2, 3], &[1, 2, 1, 1], 1, 3);
    }

    #[test]
    fn guessing_the_secret_scores_full_marks() {
        check(&[7, 7, 0, 3], &[7, 7, 0, 3], 4, 4);
    }

    #[test]
    fn exact_hits_also_count_toward_total() {
        // Both digits positionally exact, so exact == total == 2.
        check(&[4, 4, 1, 2], &[4, 4, 3, 5], 2, 2);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        assert_eq!(
            score(&[0, 1, 3, 5], &[0, 1, 3]),
            Err(ScoreError::LengthMismatch {
                secret_len: 4,
                guess_len: 3
            })
        );
    }

    #[test]
    fn empty_sequences_are_rejected() {
        assert_eq!(score(&[], &[]), Err(ScoreError::Empty));
    }
}
