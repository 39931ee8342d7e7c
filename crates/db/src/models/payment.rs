//! Payment entity model and DTOs.

use givingchy_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A payment row from the `payments` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: DbId,
    pub user_id: DbId,
    pub project_id: DbId,
    pub amount: f64,
}

/// Request body for recording a payment. Absent fields decode as zero values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CreatePayment {
    pub user_id: DbId,
    pub project_id: DbId,
    pub amount: f64,
}
