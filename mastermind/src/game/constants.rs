//! Fixed game parameters.

/// Number of digits in every secret and guess.
pub const SECRET_LEN: usize = 4;

/// Guesses and hints draw from the same attempt budget.
pub const ATTEMPTS_MAX: u8 = 10;

/// Smallest digit in either difficulty.
pub const DIGIT_MIN: u8 = 0;

/// Largest digit on normal difficulty.
pub const NORMAL_DIGIT_MAX: u8 = 7;

/// Largest digit on hard difficulty.
pub const HARD_DIGIT_MAX: u8 = 9;

pub const NORMAL_HINTS_MAX: u8 = 2;
pub const HARD_HINTS_MAX: u8 = 1;

/// Rows returned by the default leaderboard query.
pub const LEADERBOARD_LIMIT: i64 = 5;

/// Player names longer than this many characters are truncated on input.
pub const MAX_PLAYER_NAME_LEN: usize = 16;

/// Timeout for a single remote secret fetch.
pub const SECRET_FETCH_TIMEOUT_SECS: u64 = 3;

/// Remote fetch attempts before the local generator takes over.
pub const SECRET_FETCH_RETRIES: u32 = 3;
