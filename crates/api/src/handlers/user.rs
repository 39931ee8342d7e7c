use axum::extract::State;
use axum::Json;
use givingchy_db::models::user::User;

use crate::error::AppResult;
use crate::extract::Pagination;
use crate::state::AppState;

/// GET /users?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    Pagination(cursor): Pagination,
) -> AppResult<Json<Vec<User>>> {
    let users = state.datastore.all_users(cursor).await?;
    Ok(Json(users))
}
