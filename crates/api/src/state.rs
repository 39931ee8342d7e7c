use std::sync::Arc;

use givingchy_db::Datastore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The persistence capability every handler delegates to.
    pub datastore: Arc<dyn Datastore>,
    /// Server configuration (JWT settings are read by the auth handlers).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(datastore: Arc<dyn Datastore>, config: ServerConfig) -> Self {
        Self {
            datastore,
            config: Arc::new(config),
        }
    }
}
