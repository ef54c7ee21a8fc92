//! Free-form guess text validation.
//!
//! Accepts a compact digit run ("1425"), comma-separated, space-separated,
//! or any mixed/irregular separators. Multi-character tokens explode into
//! independent single digits, so "22" contributes two 2's.

use thiserror::Error;

use crate::game::entities::Digit;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("empty input, please enter {expected} digits ({digit_min}-{digit_max})")]
    Empty {
        expected: usize,
        digit_min: Digit,
        digit_max: Digit,
    },
    #[error("invalid token {token:?}, use digits {digit_min}-{digit_max} and separators (space/comma)")]
    InvalidToken {
        token: String,
        digit_min: Digit,
        digit_max: Digit,
    },
    #[error("digits must be between {digit_min} and {digit_max}")]
    OutOfRange { digit_min: Digit, digit_max: Digit },
    #[error("please enter exactly {expected} digits")]
    TooManyDigits { expected: usize },
    #[error("expected exactly {expected} digits, got {actual}")]
    WrongCount { expected: usize, actual: usize },
}

/// Turns `raw` into exactly `len` digits in `[digit_min, digit_max]`.
///
/// Digits are validated in encounter order: a range violation on the
/// fifth digit of a five-digit line reports the range error, matching
/// the per-digit check running before the count check.
pub fn parse_guess(
    raw: &str,
    len: usize,
    digit_min: Digit,
    digit_max: Digit,
) -> Result<Vec<Digit>, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty {
            expected: len,
            digit_min,
            digit_max,
        });
    }

    let mut digits = Vec::with_capacity(len);
    for token in trimmed.replace(',', " ").split_whitespace() {
        if !token.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseError::InvalidToken {
                token: token.to_string(),
                digit_min,
                digit_max,
            });
        }
        for ch in token.chars() {
            let digit = ch as Digit - b'0';
            if digit < digit_min || digit > digit_max {
                return Err(ParseError::OutOfRange {
                    digit_min,
                    digit_max,
                });
            }
            digits.push(digit);
            if digits.len() > len {
                return Err(ParseError::TooManyDigits { expected: len });
            }
        }
    }

    if digits.len() != len {
        return Err(ParseError::WrongCount {
            expected: len,
            actual: digits.len(),
        });
    }
    Ok(digits)
}
