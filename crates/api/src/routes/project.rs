//! Route definitions for the project resource.
//!
//! Creation lives at the singular `/project`; everything else under
//! `/projects`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// ```text
/// GET    /projects                 -> list
/// GET    /projects/{id}            -> get_by_id
/// PUT    /projects/{id}            -> replace
/// GET    /projects/{id}/comments   -> list_comments
/// POST   /project                  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list))
        .route("/projects/{id}", get(project::get_by_id).put(project::replace))
        .route("/projects/{id}/comments", get(project::list_comments))
        .route("/project", post(project::create))
}
