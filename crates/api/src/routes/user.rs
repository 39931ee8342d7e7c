use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, user};
use crate::state::AppState;

/// ```text
/// POST   /auth    -> login
/// POST   /user    -> register
/// GET    /users   -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth", post(auth::login))
        .route("/user", post(auth::register))
        .route("/users", get(user::list))
}
