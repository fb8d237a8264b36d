//! Result reduction for completed quiz sessions.

use chrono::{DateTime, Utc};

use crate::error::{QuizError, Result};
use crate::types::{AnalysisSummary, Direction};

/// Reduce a completed session's recorded answers into an analysis summary.
///
/// Each given answer is compared to its correct answer by exact,
/// case-sensitive string equality; no folding or trimming is applied.
///
/// Fails with [`QuizError::MismatchedLengths`] unless the three sequences
/// have the same length, and with [`QuizError::EmptyWordBank`] when that
/// length is zero (an empty quiz can only come from an empty bank
/// upstream).
pub fn reduce(
    correct_answers: &[String],
    answers_given: &[String],
    prompts: &[String],
    direction: Direction,
    started_at: DateTime<Utc>,
    ended_at: DateTime<Utc>,
) -> Result<AnalysisSummary> {
    if correct_answers.len() != answers_given.len() || correct_answers.len() != prompts.len() {
        return Err(QuizError::MismatchedLengths {
            correct: correct_answers.len(),
            given: answers_given.len(),
            prompts: prompts.len(),
        });
    }
    if correct_answers.is_empty() {
        return Err(QuizError::EmptyWordBank);
    }

    let correct_count = correct_answers
        .iter()
        .zip(answers_given)
        .filter(|(correct, given)| correct == given)
        .count() as u32;
    let wrong_count = correct_answers.len() as u32 - correct_count;

    Ok(AnalysisSummary {
        direction,
        prompts: prompts.to_vec(),
        correct_answers: correct_answers.to_vec(),
        answers_given: answers_given.to_vec(),
        correct_count,
        wrong_count,
        success_rate: f64::from(correct_count) / correct_answers.len() as f64,
        elapsed_ms: (ended_at - started_at).num_milliseconds(),
    })
}
