//! Comment entity model and DTOs.

use givingchy_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A comment row from the `comments` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: DbId,
    pub user_id: DbId,
    pub project_id: DbId,
    pub content: String,
    pub created: Timestamp,
}

/// Request body for posting a comment on a project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CreateComment {
    pub user_id: DbId,
    pub project_id: DbId,
    pub content: String,
}
