//! Repository for the `payments` table.

use givingchy_core::pagination::PageCursor;
use givingchy_core::types::DbId;
use sqlx::PgPool;

use crate::models::payment::{CreatePayment, Payment};

const COLUMNS: &str = "id, user_id, project_id, amount";

pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a payment and return its id.
    pub async fn create(pool: &PgPool, input: &CreatePayment) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO payments (user_id, project_id, amount)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(input.user_id)
        .bind(input.project_id)
        .bind(input.amount)
        .fetch_one(pool)
        .await
    }

    /// List one page of payments ordered by id.
    pub async fn list(pool: &PgPool, cursor: PageCursor) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Payment>(&query)
            .bind(cursor.limit())
            .bind(cursor.offset())
            .fetch_all(pool)
            .await
    }

    /// Delete a payment by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM payments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
