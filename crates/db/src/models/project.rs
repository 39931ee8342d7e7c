//! Project entity model and DTOs.

use givingchy_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub user_id: DbId,
    /// Name of the category the project is filed under.
    pub category: String,
    pub description: String,
    pub image: String,
    pub verified: bool,
    pub amount_required: f64,
    pub end_time: Timestamp,
}

/// Request body for `POST /project`.
///
/// Absent fields take their zero value and are left for the datastore to
/// accept or reject. `verified` is accepted but ignored; new projects always
/// start unverified.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CreateProject {
    pub title: String,
    pub user_id: DbId,
    pub category: String,
    pub description: String,
    pub image: String,
    pub verified: bool,
    pub amount_required: f64,
    pub end_time: Timestamp,
}

/// Request body for `PUT /projects/{id}`, a full replacement.
///
/// Every field except `verified` (default `false`) must be present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReplaceProject {
    pub title: String,
    pub user_id: DbId,
    pub category: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub verified: bool,
    pub amount_required: f64,
    pub end_time: Timestamp,
}
