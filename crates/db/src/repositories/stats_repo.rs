//! Aggregate queries backing `GET /stats`.

use sqlx::PgPool;

use crate::models::stats::Statistics;

pub struct StatsRepo;

impl StatsRepo {
    /// Compute all platform aggregates in a single round trip.
    pub async fn all(pool: &PgPool) -> Result<Statistics, sqlx::Error> {
        sqlx::query_as::<_, Statistics>(
            "SELECT
                (SELECT COUNT(*) FROM projects) AS project_count,
                (SELECT COUNT(*) FROM projects WHERE verified) AS verified_project_count,
                (SELECT COUNT(*) FROM users) AS user_count,
                (SELECT COUNT(*) FROM payments) AS payment_count,
                (SELECT COUNT(*) FROM comments) AS comment_count,
                (SELECT COALESCE(SUM(amount), 0)::DOUBLE PRECISION FROM payments) AS amount_raised",
        )
        .fetch_one(pool)
        .await
    }
}
