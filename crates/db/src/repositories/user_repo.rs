//! Repository for the `users` table.

use givingchy_core::pagination::PageCursor;
use sqlx::PgPool;

use crate::models::user::{User, UserCredentials};

/// Public columns; `password_hash` is deliberately absent.
const COLUMNS: &str = "id, email, username, image, is_admin";

pub struct UserRepo;

impl UserRepo {
    /// Insert a user with an already-hashed password, returning the public row.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
        username: &str,
        image: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, username, image)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(password_hash)
            .bind(username)
            .bind(image)
            .fetch_one(pool)
            .await
    }

    /// Look up a user and their password hash by email.
    pub async fn find_credentials_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<UserCredentials>, sqlx::Error> {
        sqlx::query_as::<_, UserCredentials>(
            "SELECT id, email, password_hash, username, image, is_admin
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// List one page of users ordered by id.
    pub async fn list(pool: &PgPool, cursor: PageCursor) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, User>(&query)
            .bind(cursor.limit())
            .bind(cursor.offset())
            .fetch_all(pool)
            .await
    }
}
