use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// ```text
/// GET    /comments        -> list
/// POST   /comments        -> create
/// DELETE /comments/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/comments", get(comment::list).post(comment::create))
        .route("/comments/{id}", delete(comment::delete))
}
