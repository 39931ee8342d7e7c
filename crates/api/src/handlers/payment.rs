//! Handlers for the `/payments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use givingchy_core::types::DbId;
use givingchy_db::models::payment::{CreatePayment, Payment};

use crate::error::AppResult;
use crate::extract::{parse_id, JsonBody, Pagination};
use crate::state::AppState;

/// GET /payments?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    Pagination(cursor): Pagination,
) -> AppResult<Json<Vec<Payment>>> {
    let payments = state.datastore.all_payments(cursor).await?;
    Ok(Json(payments))
}

/// POST /payments
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreatePayment>,
) -> AppResult<(StatusCode, Json<DbId>)> {
    let id = state.datastore.create_payment(&input).await?;
    tracing::info!(payment_id = id, project_id = input.project_id, "Payment recorded");
    Ok((StatusCode::CREATED, Json(id)))
}

/// DELETE /payments/{id}
///
/// Deleting an id that no longer exists is a datastore error (500).
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&raw_id, "payment")?;
    state.datastore.delete_payment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
