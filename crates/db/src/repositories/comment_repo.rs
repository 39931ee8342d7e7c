//! Repository for the `comments` table.

use givingchy_core::pagination::PageCursor;
use givingchy_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

const COLUMNS: &str = "id, user_id, project_id, content, created";

pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment and return its id. `created` is set by the database.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO comments (user_id, project_id, content)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(input.user_id)
        .bind(input.project_id)
        .bind(&input.content)
        .fetch_one(pool)
        .await
    }

    /// List one page of comments across all projects, newest first.
    pub async fn list(pool: &PgPool, cursor: PageCursor) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             ORDER BY created DESC, id DESC LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(cursor.limit())
            .bind(cursor.offset())
            .fetch_all(pool)
            .await
    }

    /// List one page of comments for a single project, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
        cursor: PageCursor,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments WHERE project_id = $1
             ORDER BY created DESC, id DESC LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(project_id)
            .bind(cursor.limit())
            .bind(cursor.offset())
            .fetch_all(pool)
            .await
    }

    /// Delete a comment by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
