use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

/// ```text
/// GET    /payments        -> list
/// POST   /payments        -> create
/// DELETE /payments/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/payments", get(payment::list).post(payment::create))
        .route("/payments/{id}", delete(payment::delete))
}
