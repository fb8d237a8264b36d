//! Registration, sign-in, and the session middleware

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    http::StatusCode,
    middleware::Next,
    response::Response,
    Extension, Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{RegisterRequest, RegisterResponse, SignInRequest, SignInResponse};
use crate::services::password;
use crate::AppState;

/// Authenticated user info stored in request extensions
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub nickname: String,
    pub token: String,
}

/// Auth middleware - resolves the bearer token to a live session
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization format".to_string()))?
        .to_string();

    let session = state
        .sessions
        .get(&token)
        .await
        .ok_or_else(|| ApiError::Unauthorized("Invalid session token".to_string()))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: session.user_id,
        nickname: session.nickname,
        token,
    });

    Ok(next.run(request).await)
}

/// POST /api/auth/register
/// Creates a new user account
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>> {
    if state
        .db
        .get_user_by_nickname(&payload.nickname)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(format!(
            "nickname {} is already registered",
            payload.nickname
        )));
    }

    let password_hash = password::hash_password(&payload.password)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))?;

    let user = state
        .db
        .create_user(
            &payload.name,
            &payload.surname,
            &payload.nickname,
            &password_hash,
        )
        .await?;

    tracing::info!(user_id = %user.id, nickname = %user.nickname, "registered new user");

    Ok(Json(RegisterResponse {
        user_id: user.id,
        nickname: user.nickname,
    }))
}

/// POST /api/auth/sign-in
/// Verifies credentials and mints a session token
pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInRequest>,
) -> Result<Json<SignInResponse>> {
    // One message for both failure cases; nickname existence is not leaked.
    let invalid = || ApiError::Unauthorized("invalid nickname or password".to_string());

    let user = state
        .db
        .get_user_by_nickname(&payload.nickname)
        .await?
        .ok_or_else(invalid)?;

    let verified = password::verify_password(&payload.password, &user.password_hash)
        .map_err(|e| ApiError::Internal(format!("password verification failed: {e}")))?;
    if !verified {
        return Err(invalid());
    }

    let token = state.sessions.create(user.id, &user.nickname).await;

    tracing::info!(user_id = %user.id, "user signed in");

    Ok(Json(SignInResponse {
        token,
        nickname: user.nickname,
    }))
}

/// POST /api/auth/logout
/// Drops the session behind the presented token
pub async fn logout(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedUser>,
) -> StatusCode {
    state.sessions.remove(&auth.token).await;
    StatusCode::NO_CONTENT
}
