use axum::routing::{get, post};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// ```text
/// GET    /categories   -> list
/// POST   /category     -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category::list))
        .route("/category", post(category::create))
}
