pub mod category;
pub mod comment;
pub mod health;
pub mod payment;
pub mod project;
pub mod user;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the complete route tree.
///
/// ```text
/// GET    /                            liveness probe
/// GET    /health                      service + datastore health
/// GET    /stats                       platform statistics
///
/// GET    /projects                    list / search (?search=&page=&limit=)
/// GET    /projects/{id}               get
/// PUT    /projects/{id}               full replace
/// GET    /projects/{id}/comments      comments of one project
/// POST   /project                     create
///
/// POST   /auth                        login
/// POST   /user                        register
/// GET    /users                       list
///
/// GET    /payments                    list
/// POST   /payments                    create
/// DELETE /payments/{id}               delete
///
/// GET    /categories                  list (not paginated)
/// POST   /category                    create
///
/// GET    /comments                    list
/// POST   /comments                    create
/// DELETE /comments/{id}               delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .route("/stats", get(handlers::stats::get_stats))
        .merge(project::router())
        .merge(user::router())
        .merge(payment::router())
        .merge(category::router())
        .merge(comment::router())
}
