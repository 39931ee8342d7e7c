//! Handlers for login (`POST /auth`) and registration (`POST /user`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use givingchy_core::types::DbId;
use givingchy_db::models::user::{CreateUser, User};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::issue_token;
use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth`. An absent field is matched as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response for login and registration.
///
/// Only public user fields are carried; email and password never are.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user_id: DbId,
    pub username: String,
    pub image: String,
    pub is_admin: bool,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth
///
/// A credential mismatch answers 404 with the datastore's message.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let user = state
        .datastore
        .get_user(&input.email, &input.password)
        .await
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    issue_session(&state.config, user)
}

/// POST /user
pub async fn register(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateUser>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let user = state.datastore.create_user(&input).await?;
    tracing::info!(user_id = user.id, "User registered");

    issue_session(&state.config, user)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Sign a token for `user` and build the 201 auth response.
fn issue_session(config: &ServerConfig, user: User) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let token = issue_token(user.id, &config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user_id: user.id,
            username: user.username,
            image: user.image,
            is_admin: user.is_admin,
            token,
        }),
    ))
}
