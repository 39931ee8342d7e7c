use givingchy_core::error::CoreError;

/// Error signal returned by every [`Datastore`](crate::Datastore) operation.
///
/// The display text is the raw underlying message; the HTTP layer forwards
/// it to clients unchanged.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;
