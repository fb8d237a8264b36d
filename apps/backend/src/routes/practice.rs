//! Practice endpoints driving the quiz session state machine

use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::Utc;

use quiz_core::{build_quiz_plan, reduce, QuizSessionState, SessionPhase};

use crate::error::{ApiError, Result};
use crate::models::{
    AnalysisRecord, DbAnalysis, DbWordPair, PracticeStateResponse, QuestionResponse,
    StartPracticeRequest, SubmitAnswerRequest, WordPair,
};
use crate::routes::auth::AuthenticatedUser;
use crate::AppState;

fn session_gone() -> ApiError {
    ApiError::Unauthorized("session expired".to_string())
}

/// Render the running quiz: the front question, or the terminal signal
/// telling the client to finish.
fn state_view(quiz: &QuizSessionState) -> PracticeStateResponse {
    match quiz.current_question() {
        Some(q) => PracticeStateResponse {
            finished: false,
            question: Some(QuestionResponse {
                prompt: q.prompt.to_string(),
                options: q.choices.options.clone(),
                number: q.number,
                total: q.total,
            }),
        },
        None => PracticeStateResponse {
            finished: true,
            question: None,
        },
    }
}

/// POST /api/practice/start
/// Builds a fresh quiz plan, or resumes the one already underway
pub async fn start(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(payload): Json<StartPracticeRequest>,
) -> Result<Json<PracticeStateResponse>> {
    let pairs: Vec<WordPair> = state
        .db
        .all_words()
        .await?
        .iter()
        .map(DbWordPair::to_core_pair)
        .collect();

    // Check-and-set happens in one critical section, so two racing starts
    // cannot each build a plan.
    let view = state
        .sessions
        .with_session(&auth.token, |session| {
            // Starting while a quiz is underway reuses it untouched: a page
            // reload mid-quiz must not reshuffle or lose progress.
            if !session.quiz.is_active() {
                let plan = build_quiz_plan(
                    &pairs,
                    payload.direction,
                    Utc::now(),
                    &mut rand::thread_rng(),
                )?;
                session.quiz.reset();
                session.quiz.begin(&plan);
                session.plan = Some(plan);
                tracing::info!(
                    user_id = %session.user_id,
                    direction = payload.direction.as_str(),
                    questions = session.quiz.total(),
                    "started practice quiz"
                );
            }
            Ok::<_, ApiError>(state_view(&session.quiz))
        })
        .await
        .ok_or_else(session_gone)??;

    Ok(Json(view))
}

/// GET /api/practice/question
/// The current question, or `finished` once the quiz is exhausted
pub async fn question(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<PracticeStateResponse>> {
    let view = state
        .sessions
        .with_session(&auth.token, |session| {
            if session.quiz.phase() == SessionPhase::NotStarted {
                return Err(ApiError::Conflict("no quiz in progress".to_string()));
            }
            Ok(state_view(&session.quiz))
        })
        .await
        .ok_or_else(session_gone)??;

    Ok(Json(view))
}

/// POST /api/practice/answer
/// Records one answer and advances to the next question
pub async fn answer(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Json(payload): Json<SubmitAnswerRequest>,
) -> Result<Json<PracticeStateResponse>> {
    let view = state
        .sessions
        .with_session(&auth.token, |session| {
            session.quiz.submit_answer(payload.choice)?;
            Ok::<_, ApiError>(state_view(&session.quiz))
        })
        .await
        .ok_or_else(session_gone)??;

    Ok(Json(view))
}

/// POST /api/practice/finish
/// Reduces the exhausted quiz into a persisted analysis record
pub async fn finish(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<Json<AnalysisRecord>> {
    let summary = state
        .sessions
        .with_session(&auth.token, |session| {
            if session.quiz.phase() != SessionPhase::Exhausted {
                return Err(ApiError::Conflict("quiz is not finished".to_string()));
            }
            let plan = session.plan.take().ok_or_else(|| {
                ApiError::Internal("exhausted quiz without a stored plan".to_string())
            })?;
            let summary = reduce(
                &plan.correct_answers,
                session.quiz.answers_given(),
                &plan.prompts,
                plan.direction,
                plan.started_at,
                Utc::now(),
            )?;
            session.quiz.reset();
            Ok(summary)
        })
        .await
        .ok_or_else(session_gone)??;

    let analysis = DbAnalysis::from_summary(auth.user_id, &summary);
    state.db.insert_analysis(&analysis).await?;

    tracing::info!(
        user_id = %auth.user_id,
        correct = analysis.correct_count,
        wrong = analysis.wrong_count,
        success_rate = analysis.success_rate,
        "persisted quiz analysis"
    );

    Ok(Json(analysis.to_api_record()))
}

/// POST /api/practice/exit
/// Abandons the in-flight quiz; nothing is persisted
pub async fn exit(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> Result<StatusCode> {
    state
        .sessions
        .with_session(&auth.token, |session| {
            session.quiz.reset();
            session.plan = None;
        })
        .await
        .ok_or_else(session_gone)?;

    Ok(StatusCode::NO_CONTENT)
}
