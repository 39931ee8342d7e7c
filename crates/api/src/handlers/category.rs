//! Handlers for categories (`/categories`, `/category`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use givingchy_db::models::category::{Category, CreateCategory};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /categories -- not paginated.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.datastore.all_categories().await?;
    Ok(Json(categories))
}

/// POST /category
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = state.datastore.create_category(&input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}
