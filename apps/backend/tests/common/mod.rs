//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with database
//! - Helper functions for creating test data and driving full quizzes
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL env
//! var). Word-bank tests reset the shared `words` table, so they assume
//! exclusive access to the test database.

pub mod fixtures;

use std::sync::Arc;

use axum::http::header::AUTHORIZATION;
use axum::Router;
use axum_test::TestServer;

use vocab_trainer_backend::db::Database;
use vocab_trainer_backend::models::DbWordPair;
use vocab_trainer_backend::services::session::SessionStore;
use vocab_trainer_backend::{build_router, AppState};

/// Test context containing database connection and test server.
///
/// Use this to set up integration tests with a real database connection.
/// Requires DATABASE_URL environment variable to be set.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);

        let state = AppState {
            db: db.clone(),
            sessions: Arc::new(SessionStore::new()),
        };

        let app = build_router(state);

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Format authorization header value.
    pub fn auth_header_value(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// Empty the word bank.
    pub async fn clear_words(&self) {
        let _ = sqlx::query("DELETE FROM words").execute(self.db.pool()).await;
    }

    /// Seed the word bank with the sample pairs and return them.
    pub async fn seed_words(&self) -> Vec<DbWordPair> {
        let mut words = Vec::new();
        for (english, turkish) in fixtures::SAMPLE_WORDS {
            let word = self
                .db
                .insert_word(english, turkish)
                .await
                .expect("Failed to seed word");
            words.push(word);
        }
        words
    }

    /// Clean up a test user and their analyses.
    ///
    /// Call this after tests to remove test data.
    pub async fn cleanup_user(&self, nickname: &str) {
        // Delete in order due to foreign keys
        let _ = sqlx::query(
            "DELETE FROM analyses WHERE user_id = (SELECT id FROM users WHERE nickname = $1)",
        )
        .bind(nickname)
        .execute(self.db.pool())
        .await;

        let _ = sqlx::query("DELETE FROM users WHERE nickname = $1")
            .bind(nickname)
            .execute(self.db.pool())
            .await;
    }
}

/// Register a user and sign them in, returning the session token.
pub async fn register_and_sign_in(server: &TestServer, nickname: &str) -> String {
    let response = server
        .post("/api/auth/register")
        .json(&fixtures::register_request(nickname))
        .await;
    response.assert_status_ok();

    let response = server
        .post("/api/auth/sign-in")
        .json(&fixtures::sign_in_request(nickname))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    body["token"].as_str().expect("token in response").to_string()
}

/// Drive a started quiz to exhaustion and finish it, returning the
/// persisted analysis record.
///
/// Picks the correct option for every prompt when `answer_correctly`,
/// otherwise a string that matches nothing.
pub async fn run_full_quiz(
    server: &TestServer,
    token: &str,
    words: &[DbWordPair],
    answer_correctly: bool,
) -> serde_json::Value {
    let response = server
        .post("/api/practice/start")
        .add_header(AUTHORIZATION, TestContext::auth_header_value(token))
        .json(&fixtures::start_request("english_to_turkish"))
        .await;
    response.assert_status_ok();
    let mut body: serde_json::Value = response.json();

    while !body["finished"].as_bool().expect("finished flag") {
        let prompt = body["question"]["prompt"].as_str().expect("prompt");
        let choice = if answer_correctly {
            words
                .iter()
                .find(|w| w.english_word == prompt)
                .expect("prompt must come from the seeded words")
                .turkish_word
                .clone()
        } else {
            "not a translation".to_string()
        };

        let response = server
            .post("/api/practice/answer")
            .add_header(AUTHORIZATION, TestContext::auth_header_value(token))
            .json(&serde_json::json!({ "choice": choice }))
            .await;
        response.assert_status_ok();
        body = response.json();
    }

    let response = server
        .post("/api/practice/finish")
        .add_header(AUTHORIZATION, TestContext::auth_header_value(token))
        .await;
    response.assert_status_ok();
    response.json()
}
