//! Core quiz library for the vocabulary trainer backend.
//!
//! Provides:
//! - Multiple-choice generation from a word bank
//! - Quiz plan construction (three co-permuted parallel sequences)
//! - The per-user quiz session state machine
//! - Result reduction into an analysis summary
//!
//! The crate is pure: no I/O, no async, and randomness is injected as a
//! `rand::Rng` so callers control seeding.

pub mod choices;
pub mod error;
pub mod plan;
pub mod reduce;
pub mod session;
pub mod types;

pub use choices::generate_choices;
pub use error::{QuizError, Result};
pub use plan::build_quiz_plan;
pub use reduce::reduce;
pub use session::{CurrentQuestion, QuizSessionState, SessionPhase};
pub use types::{
    AnalysisSummary, ChoiceSet, Direction, QuizPlan, WordPair, CHOICES_PER_QUESTION,
};
