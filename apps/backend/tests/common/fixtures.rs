//! Test fixtures and factory functions for creating test data.

use serde_json::json;
use uuid::Uuid;

/// Sample word bank used across tests: large enough for four-option
/// questions (each correct answer leaves four incorrect candidates).
pub const SAMPLE_WORDS: &[(&str, &str)] = &[
    ("cat", "kedi"),
    ("dog", "köpek"),
    ("bird", "kuş"),
    ("fish", "balık"),
    ("apple", "elma"),
];

/// Generate a nickname that cannot collide across test runs.
pub fn unique_nickname(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Create a registration request body.
pub fn register_request(nickname: &str) -> serde_json::Value {
    json!({
        "name": "Aylin",
        "surname": "Yılmaz",
        "nickname": nickname,
        "password": "correct horse battery staple",
    })
}

/// Create a sign-in request body matching [`register_request`].
pub fn sign_in_request(nickname: &str) -> serde_json::Value {
    json!({
        "nickname": nickname,
        "password": "correct horse battery staple",
    })
}

/// Create a word insertion request body.
pub fn insert_word_request(english: &str, turkish: &str) -> serde_json::Value {
    json!({
        "english_word": english,
        "turkish_word": turkish,
    })
}

/// Create a practice start request body.
pub fn start_request(direction: &str) -> serde_json::Value {
    json!({ "direction": direction })
}
