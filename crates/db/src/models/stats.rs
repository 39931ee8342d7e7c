use serde::Serialize;
use sqlx::FromRow;

/// Platform-wide aggregates, computed on demand.
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub project_count: i64,
    pub verified_project_count: i64,
    pub user_count: i64,
    pub payment_count: i64,
    pub comment_count: i64,
    /// Sum of all payment amounts (0 when there are none).
    pub amount_raised: f64,
}
