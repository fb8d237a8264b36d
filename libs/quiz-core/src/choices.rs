//! Multiple-choice generation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{QuizError, Result};
use crate::types::{ChoiceSet, CHOICES_PER_QUESTION};

const INCORRECT_PER_QUESTION: usize = CHOICES_PER_QUESTION - 1;

/// Build the shuffled 4-option set for one question.
///
/// Draws three incorrect options from `pool` and shuffles them together
/// with `correct`. The draw is uniform over pool entries, so a translation
/// carried by two word pairs is twice as likely to be picked, but the
/// returned set never repeats a value. Entries equal to `correct` are
/// skipped.
///
/// Fails with [`QuizError::InsufficientCandidates`] when the pool holds
/// fewer than three distinct incorrect values.
pub fn generate_choices<R: Rng + ?Sized>(
    correct: &str,
    pool: &[&str],
    rng: &mut R,
) -> Result<ChoiceSet> {
    let mut entries: Vec<&str> = pool.iter().copied().filter(|v| *v != correct).collect();
    entries.shuffle(rng);

    let mut options: Vec<String> = Vec::with_capacity(CHOICES_PER_QUESTION);
    options.push(correct.to_string());
    for value in entries {
        if options.iter().any(|o| o == value) {
            continue;
        }
        options.push(value.to_string());
        if options.len() == CHOICES_PER_QUESTION {
            break;
        }
    }

    if options.len() < CHOICES_PER_QUESTION {
        return Err(QuizError::InsufficientCandidates {
            needed: INCORRECT_PER_QUESTION,
            available: options.len() - 1,
        });
    }

    options.shuffle(rng);
    Ok(ChoiceSet { options })
}
