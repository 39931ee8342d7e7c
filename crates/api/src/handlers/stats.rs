use axum::extract::State;
use axum::Json;
use givingchy_db::models::stats::Statistics;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /stats
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<Statistics>> {
    let stats = state.datastore.all_statistics().await?;
    Ok(Json(stats))
}
