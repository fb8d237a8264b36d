//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from quiz-core
pub use quiz_core::types::{AnalysisSummary, ChoiceSet, Direction, QuizPlan, WordPair};

// === Database Entity Types ===

/// Registered user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub nickname: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub registration_date: DateTime<Utc>,
}

/// Word pair stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWordPair {
    pub id: i64,
    pub english_word: String,
    pub turkish_word: String,
}

impl DbWordPair {
    /// Convert to the core word-pair type
    pub fn to_core_pair(&self) -> WordPair {
        WordPair {
            id: self.id,
            english_word: self.english_word.clone(),
            turkish_word: self.turkish_word.clone(),
        }
    }
}

/// Persisted quiz analysis
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAnalysis {
    pub id: Uuid,
    pub user_id: Uuid,
    pub direction: String,
    pub prompts: Vec<String>,
    pub correct_options: Vec<String>,
    pub selected_options: Vec<String>,
    pub words_count: i32,
    pub correct_count: i32,
    pub wrong_count: i32,
    pub success_rate: f64,
    pub elapsed_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl DbAnalysis {
    /// Create from a core analysis summary
    pub fn from_summary(user_id: Uuid, summary: &AnalysisSummary) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            direction: summary.direction.as_str().to_string(),
            prompts: summary.prompts.clone(),
            correct_options: summary.correct_answers.clone(),
            selected_options: summary.answers_given.clone(),
            words_count: summary.words_count() as i32,
            correct_count: summary.correct_count as i32,
            wrong_count: summary.wrong_count as i32,
            success_rate: summary.success_rate,
            elapsed_ms: summary.elapsed_ms,
            created_at: Utc::now(),
        }
    }

    /// Convert to the API record type
    pub fn to_api_record(&self) -> AnalysisRecord {
        AnalysisRecord {
            id: self.id,
            user_id: self.user_id,
            direction: self.direction.clone(),
            prompts: self.prompts.clone(),
            correct_answers: self.correct_options.clone(),
            answers_given: self.selected_options.clone(),
            words_count: self.words_count,
            correct_count: self.correct_count,
            wrong_count: self.wrong_count,
            success_rate: self.success_rate,
            elapsed_ms: self.elapsed_ms,
            created_at: self.created_at,
        }
    }
}

/// Analysis row joined with the owning user's nickname, for history views
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisListRow {
    pub id: Uuid,
    pub nickname: String,
    pub direction: String,
    pub words_count: i32,
    pub correct_count: i32,
    pub wrong_count: i32,
    pub success_rate: f64,
    pub elapsed_ms: i64,
    pub created_at: DateTime<Utc>,
}

// === Sorting ===

/// Sortable analysis columns, whitelisted so user input never reaches SQL
/// as anything but one of these fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSort {
    WordsCount,
    CorrectCount,
    WrongCount,
    SuccessRate,
    ElapsedMs,
    CreatedAt,
}

impl AnalysisSort {
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::WordsCount => "words_count",
            Self::CorrectCount => "correct_count",
            Self::WrongCount => "wrong_count",
            Self::SuccessRate => "success_rate",
            Self::ElapsedMs => "elapsed_ms",
            Self::CreatedAt => "created_at",
        }
    }
}

impl Default for AnalysisSort {
    fn default() -> Self {
        Self::CreatedAt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Desc
    }
}

// === API Request/Response Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub nickname: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub nickname: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignInRequest {
    pub nickname: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub nickname: String,
}

// Word types
#[derive(Debug, Serialize, Deserialize)]
pub struct InsertWordRequest {
    pub english_word: String,
    pub turkish_word: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordListResponse {
    pub words: Vec<DbWordPair>,
}

// Practice types
#[derive(Debug, Serialize, Deserialize)]
pub struct StartPracticeRequest {
    pub direction: Direction,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    pub choice: String,
}

/// One question as shown to the user
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub prompt: String,
    pub options: Vec<String>,
    /// 1-based position within the quiz
    pub number: usize,
    pub total: usize,
}

/// Where the in-flight quiz stands: the current question, or finished
#[derive(Debug, Serialize, Deserialize)]
pub struct PracticeStateResponse {
    pub finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionResponse>,
}

/// Full persisted analysis, including the per-question breakdown
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub direction: String,
    pub prompts: Vec<String>,
    pub correct_answers: Vec<String>,
    pub answers_given: Vec<String>,
    pub words_count: i32,
    pub correct_count: i32,
    pub wrong_count: i32,
    pub success_rate: f64,
    pub elapsed_ms: i64,
    pub created_at: DateTime<Utc>,
}

// Analysis history types
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AnalysisListQuery {
    pub sort: Option<AnalysisSort>,
    pub order: Option<SortOrder>,
    pub direction: Option<Direction>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisListResponse {
    pub analyses: Vec<AnalysisListRow>,
}
