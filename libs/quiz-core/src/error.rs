//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Precondition violations raised by the quiz core.
///
/// None of these are retryable; they signal caller misuse or a word bank
/// too small to build four-option questions from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("need {needed} distinct incorrect options, only {available} available")]
    InsufficientCandidates { needed: usize, available: usize },

    #[error("the word bank has no entries")]
    EmptyWordBank,

    #[error("cannot submit an answer while the session is {phase}")]
    InvalidStateTransition { phase: &'static str },

    #[error(
        "mismatched sequence lengths: {correct} correct answers, {given} answers given, {prompts} prompts"
    )]
    MismatchedLengths {
        correct: usize,
        given: usize,
        prompts: usize,
    },
}
