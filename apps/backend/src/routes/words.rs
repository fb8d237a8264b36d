//! Word bank endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{DbWordPair, InsertWordRequest, WordListResponse};
use crate::AppState;

/// POST /api/words
/// Inserts a new word pair into the bank
pub async fn insert(
    State(state): State<AppState>,
    Json(payload): Json<InsertWordRequest>,
) -> Result<Json<DbWordPair>> {
    let word = state
        .db
        .insert_word(&payload.english_word, &payload.turkish_word)
        .await?;

    tracing::info!(word_id = word.id, "inserted word pair");

    Ok(Json(word))
}

/// GET /api/words
/// Lists the whole word bank
pub async fn list(State(state): State<AppState>) -> Result<Json<WordListResponse>> {
    let words = state.db.all_words().await?;
    Ok(Json(WordListResponse { words }))
}
