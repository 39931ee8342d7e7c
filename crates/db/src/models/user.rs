//! User entity model and DTOs.

use givingchy_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user as exposed by listings. Carries no password material.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub username: String,
    pub image: String,
    pub is_admin: bool,
}

/// A user row together with its password hash, used only for login.
///
/// Never serialize this; convert to [`User`] first.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub username: String,
    pub image: String,
    pub is_admin: bool,
}

impl From<UserCredentials> for User {
    fn from(row: UserCredentials) -> Self {
        Self {
            id: row.id,
            email: row.email,
            username: row.username,
            image: row.image,
            is_admin: row.is_admin,
        }
    }
}

/// Request body for registering a new user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub username: String,
    pub image: String,
}
