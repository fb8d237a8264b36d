//! Core types for the vocabulary quiz.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of options in every multiple-choice set.
pub const CHOICES_PER_QUESTION: usize = 4;

/// One English/Turkish vocabulary pair from the word bank.
///
/// Pairs are created by word insertion and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    pub id: i64,
    pub english_word: String,
    pub turkish_word: String,
}

/// Which side of a word pair is the prompt and which is the answer pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    EnglishToTurkish,
    TurkishToEnglish,
}

impl Direction {
    /// Get the direction name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnglishToTurkish => "english_to_turkish",
            Self::TurkishToEnglish => "turkish_to_english",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "english_to_turkish" => Some(Self::EnglishToTurkish),
            "turkish_to_english" => Some(Self::TurkishToEnglish),
            _ => None,
        }
    }

    /// The word shown to the user for `pair`.
    pub fn prompt_of<'a>(&self, pair: &'a WordPair) -> &'a str {
        match self {
            Self::EnglishToTurkish => &pair.english_word,
            Self::TurkishToEnglish => &pair.turkish_word,
        }
    }

    /// The translation the user must pick for `pair`.
    pub fn answer_of<'a>(&self, pair: &'a WordPair) -> &'a str {
        match self {
            Self::EnglishToTurkish => &pair.turkish_word,
            Self::TurkishToEnglish => &pair.english_word,
        }
    }
}

/// The shuffled 4-option answer set for one question.
///
/// Invariant: exactly [`CHOICES_PER_QUESTION`] distinct options, containing
/// the correct answer exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSet {
    pub options: Vec<String>,
}

impl ChoiceSet {
    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}

/// The immutable, pre-shuffled question sequence for one quiz attempt.
///
/// The three sequences are parallel: index `i` in each refers to the same
/// question. They are co-permuted by a single shared permutation at build
/// time, so the correspondence holds by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizPlan {
    pub direction: Direction,
    pub started_at: DateTime<Utc>,
    pub choice_sets: Vec<ChoiceSet>,
    pub correct_answers: Vec<String>,
    pub prompts: Vec<String>,
}

impl QuizPlan {
    /// Number of questions in the plan.
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

/// Outcome summary of one completed quiz attempt.
///
/// Immutable once constructed; persisting it is the storage layer's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub direction: Direction,
    pub prompts: Vec<String>,
    pub correct_answers: Vec<String>,
    pub answers_given: Vec<String>,
    pub correct_count: u32,
    pub wrong_count: u32,
    /// Ratio of correct answers in `[0, 1]`.
    pub success_rate: f64,
    pub elapsed_ms: i64,
}

impl AnalysisSummary {
    /// Number of questions the summary covers.
    pub fn words_count(&self) -> usize {
        self.prompts.len()
    }
}
