//! Analysis history endpoints

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{AnalysisListQuery, AnalysisListResponse, AnalysisRecord};
use crate::routes::auth::AuthenticatedUser;
use crate::AppState;

/// GET /api/analyses
/// Every user's past results (the shared history view)
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<AnalysisListQuery>,
) -> Result<Json<AnalysisListResponse>> {
    let analyses = state
        .db
        .list_analyses(
            None,
            query.direction.map(|d| d.as_str()),
            query.sort.unwrap_or_default(),
            query.order.unwrap_or_default(),
        )
        .await?;

    Ok(Json(AnalysisListResponse { analyses }))
}

/// GET /api/analyses/:id
/// One record's full per-question breakdown
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisRecord>> {
    let analysis = state
        .db
        .get_analysis(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("analysis {id}")))?;

    Ok(Json(analysis.to_api_record()))
}

/// GET /api/dashboard
/// The signed-in user's own history
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
    Query(query): Query<AnalysisListQuery>,
) -> Result<Json<AnalysisListResponse>> {
    let analyses = state
        .db
        .list_analyses(
            Some(auth.user_id),
            query.direction.map(|d| d.as_str()),
            query.sort.unwrap_or_default(),
            query.order.unwrap_or_default(),
        )
        .await?;

    Ok(Json(AnalysisListResponse { analyses }))
}
