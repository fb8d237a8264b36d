//! The live quiz session state machine.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};
use crate::types::{ChoiceSet, QuizPlan};

/// Lifecycle phase of a quiz session.
///
/// `NotStarted -> Active -> Exhausted`; `reset` returns to `NotStarted`
/// from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    NotStarted,
    Active,
    Exhausted,
}

impl SessionPhase {
    /// Get the phase name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Active => "active",
            Self::Exhausted => "exhausted",
        }
    }
}

/// The question currently facing the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentQuestion<'a> {
    pub prompt: &'a str,
    pub choices: &'a ChoiceSet,
    /// 1-based position of this question within the quiz.
    pub number: usize,
    pub total: usize,
}

/// Live progress through an in-flight quiz.
///
/// Remaining prompts and choice sets are front-popped as questions are
/// answered; `answers_given` is append-only. While a quiz is underway,
/// `answers_given.len() + remaining() == total()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSessionState {
    phase: SessionPhase,
    remaining_prompts: VecDeque<String>,
    remaining_choice_sets: VecDeque<ChoiceSet>,
    answers_given: Vec<String>,
    total: usize,
}

impl Default for QuizSessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSessionState {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::NotStarted,
            remaining_prompts: VecDeque::new(),
            remaining_choice_sets: VecDeque::new(),
            answers_given: Vec::new(),
            total: 0,
        }
    }

    /// Load a freshly built plan and go `Active`.
    ///
    /// A no-op while a quiz is already `Active`: reloading the practice
    /// page mid-quiz must not reshuffle or lose progress.
    pub fn begin(&mut self, plan: &QuizPlan) {
        if self.phase == SessionPhase::Active {
            return;
        }
        debug_assert!(!plan.is_empty(), "plans are non-empty by construction");
        self.remaining_prompts = plan.prompts.iter().cloned().collect();
        self.remaining_choice_sets = plan.choice_sets.iter().cloned().collect();
        self.answers_given = Vec::new();
        self.total = plan.len();
        self.phase = SessionPhase::Active;
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    /// Total number of questions in the running quiz.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Questions still waiting for an answer.
    pub fn remaining(&self) -> usize {
        self.remaining_prompts.len()
    }

    pub fn answers_given(&self) -> &[String] {
        &self.answers_given
    }

    /// The front question, or `None` once the quiz is exhausted (the caller
    /// is expected to move on to result reduction).
    pub fn current_question(&self) -> Option<CurrentQuestion<'_>> {
        let prompt = self.remaining_prompts.front()?;
        let choices = self.remaining_choice_sets.front()?;
        Some(CurrentQuestion {
            prompt,
            choices,
            number: self.answers_given.len() + 1,
            total: self.total,
        })
    }

    /// Record one answer and advance to the next question.
    ///
    /// Appends `choice`, pops the front prompt and its choice set together
    /// (keeping the parallel sequences aligned), and goes `Exhausted` when
    /// the last question is consumed.
    ///
    /// Fails with [`QuizError::InvalidStateTransition`] unless `Active`.
    pub fn submit_answer(&mut self, choice: String) -> Result<()> {
        if self.phase != SessionPhase::Active {
            return Err(QuizError::InvalidStateTransition {
                phase: self.phase.as_str(),
            });
        }
        self.remaining_prompts.pop_front();
        self.remaining_choice_sets.pop_front();
        self.answers_given.push(choice);
        if self.remaining_prompts.is_empty() {
            self.phase = SessionPhase::Exhausted;
        }
        Ok(())
    }

    /// Clear all progress and return to `NotStarted`.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
