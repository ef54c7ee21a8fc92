//! Interactive game session: a synchronous read-validate-act loop
//! around the turn engine, plus leaderboard rendering.

use anyhow::{Context, Result, bail};
use std::io::{self, Write};
use std::sync::Arc;

use mastermind::{
    Database, Difficulty, EngineError, GameSettings, HistoryEntry, LEADERBOARD_LIMIT, Outcome,
    PlayerName, ResultRepository, SecretProvider, SqliteResultRepository, StoreConfig, TurnEngine,
};

fn store_config(db_path: Option<String>) -> StoreConfig {
    match db_path {
        Some(path) => StoreConfig::with_path(&path),
        None => StoreConfig::from_env(),
    }
}

/// Play one game to a terminal outcome.
pub async fn run(
    name: Option<String>,
    difficulty: Option<Difficulty>,
    db_path: Option<String>,
) -> Result<()> {
    let db = Database::new(&store_config(db_path))
        .await
        .context("failed to open the leaderboard store")?;
    let repo = Arc::new(SqliteResultRepository::new(db.pool().clone()));

    let name = match name {
        Some(n) => PlayerName::new(&n),
        None => PlayerName::new(&prompt_line("Your name: ")?),
    };
    let difficulty = match difficulty {
        Some(d) => d,
        None => prompt_difficulty()?,
    };
    let settings = GameSettings::from(difficulty);

    let (secret, source) = SecretProvider::new()
        .draw(settings.secret_len, settings.digit_min, settings.digit_max)
        .await;
    println!("(Secret generated via {source})");

    let mut engine = TurnEngine::new(secret, name, settings, Some(repo.clone()))
        .context("failed to start the game")?;

    println!(
        "You have {} attempts to crack {} digits ({}-{}).",
        settings.attempts_max, settings.secret_len, settings.digit_min, settings.digit_max
    );
    println!("Commands: quit, history, hint, or a guess.");

    while engine.outcome() == Outcome::InProgress {
        let raw = prompt_line(&format!(
            "Enter {} digits ({}-{}) e.g. 1425 or 1,4,2,5: ",
            settings.secret_len, settings.digit_min, settings.digit_max
        ))?;

        match raw.to_ascii_lowercase().as_str() {
            "quit" | "q" => {
                engine.quit().context("failed to abort the game")?;
                println!("Game aborted.");
            }
            "history" => render_history(engine.history()),
            "hint" => match engine.request_hint() {
                Ok(hint) => {
                    match hint.revealed {
                        Some(digit) => println!("{digit} is definitely in there"),
                        None => println!("Every secret value has already been revealed."),
                    }
                    println!(
                        "Attempts left: {} (hints left: {})",
                        hint.attempts_remaining, hint.hints_remaining
                    );
                }
                Err(err @ (EngineError::HintsExhausted | EngineError::TooFewAttemptsForHint)) => {
                    println!("{err}");
                }
                Err(err) => return Err(err.into()),
            },
            _ => match engine.submit_guess(&raw).await {
                Ok(report) => {
                    if let Some(entry) = engine.history().last() {
                        println!("Player guesses {}, game responds {}", entry.guess, entry.score);
                    }
                    match report.outcome {
                        Outcome::Won => println!("Congrats we have a winner!!!"),
                        Outcome::Lost => println!(
                            "Game Over! The secret numbers were {}",
                            engine.secret()
                        ),
                        _ => println!("Attempts left: {}", report.attempts_remaining),
                    }
                }
                // Invalid text never consumes an attempt; re-prompt.
                Err(EngineError::InvalidGuess(err)) => println!("{err}"),
                Err(err) => return Err(err.into()),
            },
        }
    }

    // The loop only exits in a terminal state; show the standings
    // after every finished game, won or not.
    render_leaderboard(repo.as_ref()).await;

    db.close().await;
    Ok(())
}

/// Print the leaderboard and exit.
pub async fn show_leaderboard(db_path: Option<String>) -> Result<()> {
    let db = Database::new(&store_config(db_path))
        .await
        .context("failed to open the leaderboard store")?;
    let repo = SqliteResultRepository::new(db.pool().clone());
    render_leaderboard(&repo).await;
    db.close().await;
    Ok(())
}

fn render_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("(no guesses yet)");
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        println!("{:>3}. {entry}", i + 1);
    }
}

/// Best-effort: a broken leaderboard never spoils a finished game.
async fn render_leaderboard(repo: &dyn ResultRepository) {
    let rows = match repo.top_by_fewest_attempts(LEADERBOARD_LIMIT).await {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!("leaderboard query failed: {err}");
            println!("(leaderboard unavailable)");
            return;
        }
    };

    println!("Place | Name           | Attempts | Difficulty");
    println!("----------------------------------------------");
    if rows.is_empty() {
        println!("(no winning results yet)");
        return;
    }
    for (i, row) in rows.iter().enumerate() {
        println!(
            "{:>5} | {:<14} | {:^8} | {}",
            i + 1,
            row.name,
            row.attempts_used,
            row.difficulty_label
        );
    }
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read input")?;
    if read == 0 {
        bail!("input closed");
    }
    Ok(input.trim().to_string())
}

fn prompt_difficulty() -> Result<Difficulty> {
    loop {
        let raw = prompt_line("Difficulty (normal/hard): ")?;
        match raw.parse() {
            Ok(difficulty) => return Ok(difficulty),
            Err(err) => println!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn leaderboard_renders_for_empty_and_populated_stores() {
        let path = std::env::temp_dir().join(format!("mm-cli-test-{}.db", std::process::id()));
        let path_str = path.to_str().unwrap().to_string();

        // Empty store: the "(no winning results yet)" path.
        show_leaderboard(Some(path_str.clone())).await.unwrap();

        // Populated store, rendered the way the post-game path does
        // after any terminal outcome.
        let db = Database::new(&StoreConfig::with_path(&path_str))
            .await
            .unwrap();
        let repo = SqliteResultRepository::new(db.pool().clone());
        repo.record_win("alice", 3, "normal", false).await.unwrap();
        render_leaderboard(&repo).await;
        db.close().await;

        let _ = std::fs::remove_file(&path);
    }
}
