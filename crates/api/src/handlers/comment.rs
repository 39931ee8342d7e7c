//! Handlers for the `/comments` resource.
//!
//! Project-scoped listing lives with the project handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use givingchy_core::types::DbId;
use givingchy_db::models::comment::{Comment, CreateComment};

use crate::error::AppResult;
use crate::extract::{parse_id, JsonBody, Pagination};
use crate::state::AppState;

/// GET /comments?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    Pagination(cursor): Pagination,
) -> AppResult<Json<Vec<Comment>>> {
    let comments = state.datastore.all_comments(cursor).await?;
    Ok(Json(comments))
}

/// POST /comments
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateComment>,
) -> AppResult<(StatusCode, Json<DbId>)> {
    let id = state.datastore.create_comment(&input).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

/// DELETE /comments/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id, "comment")?;
    state.datastore.delete_comment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
