//! Repository for the `projects` table.

use givingchy_core::pagination::PageCursor;
use givingchy_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ReplaceProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, user_id, category, description, image, verified, amount_required, end_time";

/// Provides CRUD and search operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new, unverified project and return its id.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO projects
                (title, user_id, category, description, image, amount_required, end_time)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(input.user_id)
        .bind(&input.category)
        .bind(&input.description)
        .bind(&input.image)
        .bind(input.amount_required)
        .bind(input.end_time)
        .fetch_one(pool)
        .await
    }

    /// Find a project by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of projects ordered by id.
    pub async fn list(pool: &PgPool, cursor: PageCursor) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(cursor.limit())
            .bind(cursor.offset())
            .fetch_all(pool)
            .await
    }

    /// List one page of projects whose title or description contains `term`
    /// (case-insensitive).
    pub async fn search(
        pool: &PgPool,
        term: &str,
        cursor: PageCursor,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE title ILIKE $1 OR description ILIKE $1
             ORDER BY id LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(contains_pattern(term))
            .bind(cursor.limit())
            .bind(cursor.offset())
            .fetch_all(pool)
            .await
    }

    /// Overwrite every mutable column of a project.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &ReplaceProject,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET
                title = $2,
                user_id = $3,
                category = $4,
                description = $5,
                image = $6,
                verified = $7,
                amount_required = $8,
                end_time = $9
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(input.user_id)
        .bind(&input.category)
        .bind(&input.description)
        .bind(&input.image)
        .bind(input.verified)
        .bind(input.amount_required)
        .bind(input.end_time)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build an `ILIKE` pattern matching `term` anywhere, with the LIKE
/// metacharacters in `term` escaped.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
