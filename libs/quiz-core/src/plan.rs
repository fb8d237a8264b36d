//! Quiz plan construction.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::choices::generate_choices;
use crate::error::{QuizError, Result};
use crate::types::{Direction, QuizPlan, WordPair};

/// Build the full randomized question sequence for one quiz attempt.
///
/// Every pair in the word bank becomes one question: the prompt is the
/// `direction` side of the pair, the correct answer the opposite side, and
/// the incorrect options are drawn from the opposite side of the other
/// pairs. The three parallel sequences are then co-permuted by one shared
/// permutation, so index `i` keeps referring to the same question in each.
///
/// Fails with [`QuizError::EmptyWordBank`] when `pairs` is empty and
/// propagates [`QuizError::InsufficientCandidates`] from choice generation
/// when the bank is too small. On failure no plan exists, so no session
/// state is created.
pub fn build_quiz_plan<R: Rng + ?Sized>(
    pairs: &[WordPair],
    direction: Direction,
    started_at: DateTime<Utc>,
    rng: &mut R,
) -> Result<QuizPlan> {
    if pairs.is_empty() {
        return Err(QuizError::EmptyWordBank);
    }

    let pool: Vec<&str> = pairs.iter().map(|p| direction.answer_of(p)).collect();

    let mut choice_sets = Vec::with_capacity(pairs.len());
    let mut correct_answers = Vec::with_capacity(pairs.len());
    let mut prompts = Vec::with_capacity(pairs.len());

    for pair in pairs {
        let correct = direction.answer_of(pair);
        choice_sets.push(generate_choices(correct, &pool, rng)?);
        correct_answers.push(correct.to_string());
        prompts.push(direction.prompt_of(pair).to_string());
    }

    let mut order: Vec<usize> = (0..pairs.len()).collect();
    order.shuffle(rng);

    Ok(QuizPlan {
        direction,
        started_at,
        choice_sets: permute(&choice_sets, &order),
        correct_answers: permute(&correct_answers, &order),
        prompts: permute(&prompts, &order),
    })
}

/// Reorder `items` by `order`, where `order[i]` names the source index of
/// the element placed at position `i`.
fn permute<T: Clone>(items: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&i| items[i].clone()).collect()
}
