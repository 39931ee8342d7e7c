//! Persistence layer: entity models, the [`Datastore`] capability trait and
//! its PostgreSQL implementation.

use sqlx::postgres::PgPoolOptions;

pub mod datastore;
pub mod error;
pub mod models;
pub mod pg;
pub mod repositories;

pub use datastore::Datastore;
pub use error::{DbError, DbResult};
pub use pg::PgDatastore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
