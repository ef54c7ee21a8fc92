//! Secret acquisition from the RANDOM.ORG integer API.
//!
//! Remote fetches run under an explicit retry policy: a handful of
//! attempts with a short timeout and backoff, after which the provider
//! falls back to an OS-seeded CSPRNG. Callers always get a secret; the
//! tagged source says where it came from.

use log::{debug, warn};
use rand::Rng;
use std::{fmt, time::Duration};
use thiserror::Error;

use crate::game::constants::{SECRET_FETCH_RETRIES, SECRET_FETCH_TIMEOUT_SECS};
use crate::game::entities::{Digit, Secret};

const RANDOM_ORG_URL: &str = "https://www.random.org/integers/";

/// RANDOM.ORG's usage guidelines ask clients to identify themselves.
const USER_AGENT: &str = concat!("mastermind/", env!("CARGO_PKG_VERSION"));

/// Which generator produced a secret. Informational only.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SecretSource {
    Remote,
    LocalFallback,
}

impl fmt::Display for SecretSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Remote => "random.org",
            Self::LocalFallback => "local fallback",
        };
        f.write_str(repr)
    }
}

/// Failures of a single remote fetch attempt. Never surfaced past
/// [`SecretProvider::draw`], which recovers via the local generator.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    BadStatus(reqwest::StatusCode),
    #[error("service reported an error: {0}")]
    ServiceError(String),
    #[error("expected {expected} values in response, got {actual}")]
    WrongLineCount { expected: usize, actual: usize },
    #[error("non-numeric value in response: {0:?}")]
    NonNumeric(String),
    #[error("value {value} outside allowed range {digit_min}-{digit_max}")]
    OutOfRange {
        value: i64,
        digit_min: Digit,
        digit_max: Digit,
    },
}

/// Draws secrets from RANDOM.ORG, falling back to local generation.
pub struct SecretProvider {
    client: reqwest::Client,
    base_url: String,
    max_attempts: u32,
    backoff: Duration,
}

impl Default for SecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(RANDOM_ORG_URL.to_string())
    }

    /// Provider pointed at an alternate endpoint (used by tests).
    #[must_use]
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            max_attempts: SECRET_FETCH_RETRIES,
            backoff: Duration::from_millis(250),
        }
    }

    /// Override the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, max_attempts: u32, backoff: Duration) -> Self {
        self.max_attempts = max_attempts.max(1);
        self.backoff = backoff;
        self
    }

    /// Produce `length` digits in `[digit_min, digit_max]`.
    ///
    /// Infallible by design: any remote failure, after the retry budget
    /// is spent, resolves to the local generator rather than an error.
    pub async fn draw(
        &self,
        length: usize,
        digit_min: Digit,
        digit_max: Digit,
    ) -> (Secret, SecretSource) {
        for attempt in 1..=self.max_attempts {
            match self.fetch_remote(length, digit_min, digit_max).await {
                Ok(digits) => {
                    debug!("drew secret from {} on attempt {attempt}", self.base_url);
                    return (Secret::new(digits), SecretSource::Remote);
                }
                Err(err) => {
                    warn!(
                        "remote secret fetch attempt {attempt}/{} failed: {err}",
                        self.max_attempts
                    );
                    if attempt < self.max_attempts {
                        tokio::time::sleep(self.backoff * attempt).await;
                    }
                }
            }
        }

        warn!("remote attempts exhausted, generating secret locally");
        (
            local_secret(length, digit_min, digit_max),
            SecretSource::LocalFallback,
        )
    }

    async fn fetch_remote(
        &self,
        length: usize,
        digit_min: Digit,
        digit_max: Digit,
    ) -> Result<Vec<Digit>, ProviderError> {
        let response = self
            .client
            .get(&self.base_url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("num", length.to_string()),
                ("min", digit_min.to_string()),
                ("max", digit_max.to_string()),
                ("col", "1".to_string()),
                ("base", "10".to_string()),
                ("format", "plain".to_string()),
                ("rnd", "new".to_string()),
            ])
            .timeout(Duration::from_secs(SECRET_FETCH_TIMEOUT_SECS))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::BadStatus(status));
        }

        let body = response.text().await?;
        parse_remote_body(&body, length, digit_min, digit_max)
    }
}

/// Validates a plain-text response: one value per non-empty line,
/// exactly `expected` of them, all within range. RANDOM.ORG signals
/// failures in-band with an "Error:" body.
fn parse_remote_body(
    body: &str,
    expected: usize,
    digit_min: Digit,
    digit_max: Digit,
) -> Result<Vec<Digit>, ProviderError> {
    let trimmed = body.trim();
    if trimmed.starts_with("Error:") {
        let first_line = trimmed.lines().next().unwrap_or_default();
        return Err(ProviderError::ServiceError(first_line.to_string()));
    }

    let lines: Vec<&str> = trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() != expected {
        return Err(ProviderError::WrongLineCount {
            expected,
            actual: lines.len(),
        });
    }

    lines
        .into_iter()
        .map(|line| {
            let value: i64 = line
                .parse()
                .map_err(|_| ProviderError::NonNumeric(line.to_string()))?;
            if value < i64::from(digit_min) || value > i64::from(digit_max) {
                return Err(ProviderError::OutOfRange {
                    value,
                    digit_min,
                    digit_max,
                });
            }
            Ok(value as Digit)
        })
        .collect()
}

/// Local secret generation from the OS-seeded CSPRNG.
#[must_use]
pub fn local_secret(length: usize, digit_min: Digit, digit_max: Digit) -> Secret {
    let mut rng = rand::rng();
    Secret::new(
        (0..length)
            .map(|_| rng.random_range(digit_min..=digit_max))
            .collect(),
    )
}
