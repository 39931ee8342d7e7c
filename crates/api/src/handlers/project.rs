//! Handlers for the project resource (`/projects`, `/project`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use givingchy_core::types::DbId;
use givingchy_db::models::comment::Comment;
use givingchy_db::models::project::{CreateProject, Project, ReplaceProject};

use crate::error::AppResult;
use crate::extract::{parse_id, JsonBody, Pagination, SearchTerm};
use crate::state::AppState;

const ENTITY: &str = "project";

/// GET /projects?search=&page=&limit=
///
/// A non-empty `search` switches to the datastore's search operation with
/// the same pagination.
pub async fn list(
    State(state): State<AppState>,
    Pagination(cursor): Pagination,
    SearchTerm(search): SearchTerm,
) -> AppResult<Json<Vec<Project>>> {
    let projects = match search {
        Some(term) => state.datastore.search_projects(&term, cursor).await?,
        None => state.datastore.all_projects(cursor).await?,
    };
    Ok(Json(projects))
}

/// GET /projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Project>> {
    let id = parse_id(&raw_id, ENTITY)?;
    let project = state.datastore.get_project(id).await?;
    Ok(Json(project))
}

/// GET /projects/{id}/comments?page=&limit=
pub async fn list_comments(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Pagination(cursor): Pagination,
) -> AppResult<Json<Vec<Comment>>> {
    let id = parse_id(&raw_id, ENTITY)?;
    let comments = state.datastore.all_project_comments(id, cursor).await?;
    Ok(Json(comments))
}

/// PUT /projects/{id}
///
/// Full replacement. Answers 204 with no body.
pub async fn replace(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(input): JsonBody<ReplaceProject>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id, ENTITY)?;
    state.datastore.replace_project(id, &input).await?;
    tracing::info!(project_id = id, "Project replaced");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /project
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateProject>,
) -> AppResult<(StatusCode, Json<DbId>)> {
    let id = state.datastore.create_project(&input).await?;
    tracing::info!(project_id = id, "Project created");
    Ok((StatusCode::CREATED, Json(id)))
}
