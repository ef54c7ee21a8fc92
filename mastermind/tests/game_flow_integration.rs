/// Integration tests for full game scenarios
///
/// These tests drive the turn engine end-to-end against a real (in
/// memory) SQLite result store.
use std::sync::Arc;

use mastermind::{
    ATTEMPTS_MAX, Database, Difficulty, EngineError, GameSettings, Outcome, PlayerName,
    ResultRepository, Secret, SqliteResultRepository, StoreConfig, TurnEngine,
    providers::local_secret,
};

async fn open_store() -> (Database, Arc<SqliteResultRepository>) {
    let db = Database::new(&StoreConfig::in_memory())
        .await
        .expect("failed to open in-memory store");
    let repo = Arc::new(SqliteResultRepository::new(db.pool().clone()));
    (db, repo)
}

fn new_engine(
    secret: Vec<u8>,
    name: &str,
    difficulty: Difficulty,
    store: Arc<SqliteResultRepository>,
) -> TurnEngine {
    TurnEngine::new(
        Secret::new(secret),
        PlayerName::new(name),
        GameSettings::from(difficulty),
        Some(store),
    )
    .unwrap()
}

#[tokio::test]
async fn won_game_lands_on_the_leaderboard() {
    let (db, repo) = open_store().await;
    let mut engine = new_engine(vec![0, 1, 3, 5], "alice", Difficulty::Normal, repo.clone());

    engine.submit_guess("2 2 4 6").await.unwrap();
    engine.submit_guess("0 2 4 6").await.unwrap();
    let report = engine.submit_guess("0135").await.unwrap();
    assert_eq!(report.outcome, Outcome::Won);

    let top = repo.top_by_fewest_attempts(5).await.unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name, "alice");
    assert_eq!(top[0].attempts_used, 3);
    assert_eq!(top[0].difficulty_label, "normal");

    db.close().await;
}

#[tokio::test]
async fn lost_game_reveals_the_secret_and_stores_nothing() {
    let (db, repo) = open_store().await;
    let mut engine = new_engine(vec![0, 1, 3, 5], "bob", Difficulty::Normal, repo.clone());

    for _ in 0..ATTEMPTS_MAX {
        engine.submit_guess("2 2 4 6").await.unwrap();
    }
    assert_eq!(engine.outcome(), Outcome::Lost);
    assert_eq!(engine.secret().to_string(), "0 1 3 5");

    assert!(repo.top_by_fewest_attempts(5).await.unwrap().is_empty());

    db.close().await;
}

#[tokio::test]
async fn hints_spend_attempts_but_not_recorded_guesses() {
    let (db, repo) = open_store().await;
    let mut engine = new_engine(vec![7, 1, 3, 5], "carol", Difficulty::Normal, repo.clone());

    let hint = engine.request_hint().unwrap();
    assert_eq!(hint.revealed, Some(7));
    assert_eq!(engine.attempts_remaining(), ATTEMPTS_MAX - 1);

    engine.submit_guess("7 0 0 0").await.unwrap();
    let report = engine.submit_guess("7 1 3 5").await.unwrap();
    assert_eq!(report.outcome, Outcome::Won);

    // Two guesses on the record; the hint is not one of them.
    let top = repo.top_by_fewest_attempts(5).await.unwrap();
    assert_eq!(top[0].attempts_used, 2);

    db.close().await;
}

#[tokio::test]
async fn invalid_input_reprompts_without_progress() {
    let (db, repo) = open_store().await;
    let mut engine = new_engine(vec![0, 1, 3, 5], "dave", Difficulty::Normal, repo);

    for raw in ["", "abcd", "1 2 3", "1 2 3 4 5", "8 0 0 0"] {
        let err = engine.submit_guess(raw).await.unwrap_err();
        assert!(matches!(err, EngineError::InvalidGuess(_)), "input {raw:?}");
    }

    assert_eq!(engine.outcome(), Outcome::InProgress);
    assert_eq!(engine.attempts_remaining(), ATTEMPTS_MAX);
    assert!(engine.history().is_empty());

    db.close().await;
}

#[tokio::test]
async fn hard_difficulty_accepts_the_full_digit_range() {
    let (db, repo) = open_store().await;
    let mut engine = new_engine(vec![9, 8, 0, 1], "erin", Difficulty::Hard, repo.clone());

    let report = engine.submit_guess("9 8 0 1").await.unwrap();
    assert_eq!(report.outcome, Outcome::Won);

    let top = repo.top_by_fewest_attempts(5).await.unwrap();
    assert_eq!(top[0].difficulty_label, "hard");

    db.close().await;
}

#[tokio::test]
async fn locally_drawn_secret_fits_engine_settings() {
    let (db, repo) = open_store().await;
    let settings = GameSettings::from(Difficulty::Normal);
    let secret = local_secret(settings.secret_len, settings.digit_min, settings.digit_max);

    // Constructor validation accepts anything the local generator draws.
    let engine = TurnEngine::new(secret, PlayerName::new("frank"), settings, Some(repo));
    assert!(engine.is_ok());

    db.close().await;
}
