//! The capability set the HTTP layer consumes.
//!
//! Handlers only ever see `Arc<dyn Datastore>`, so tests can substitute an
//! in-memory implementation for [`PgDatastore`](crate::PgDatastore).

use async_trait::async_trait;
use givingchy_core::pagination::PageCursor;
use givingchy_core::types::DbId;

use crate::error::DbResult;
use crate::models::category::{Category, CreateCategory};
use crate::models::comment::{Comment, CreateComment};
use crate::models::payment::{CreatePayment, Payment};
use crate::models::project::{CreateProject, Project, ReplaceProject};
use crate::models::stats::Statistics;
use crate::models::user::{CreateUser, User};

/// One operation per entity action.
///
/// Implementations own ordering, offset/limit computation and referential
/// integrity. A missing row is reported as
/// [`CoreError::NotFound`](givingchy_core::error::CoreError::NotFound).
#[async_trait]
pub trait Datastore: Send + Sync {
    /// Confirm the backing store is reachable.
    async fn ping(&self) -> DbResult<()>;

    async fn all_statistics(&self) -> DbResult<Statistics>;

    // --- projects ---

    async fn all_projects(&self, cursor: PageCursor) -> DbResult<Vec<Project>>;
    async fn search_projects(&self, term: &str, cursor: PageCursor) -> DbResult<Vec<Project>>;
    async fn get_project(&self, id: DbId) -> DbResult<Project>;
    /// Create an unverified project and return its new id.
    async fn create_project(&self, input: &CreateProject) -> DbResult<DbId>;
    async fn replace_project(&self, id: DbId, input: &ReplaceProject) -> DbResult<()>;

    // --- users ---

    async fn all_users(&self, cursor: PageCursor) -> DbResult<Vec<User>>;
    /// Find the user whose email and password both match.
    async fn get_user(&self, email: &str, password: &str) -> DbResult<User>;
    async fn create_user(&self, input: &CreateUser) -> DbResult<User>;

    // --- payments ---

    async fn all_payments(&self, cursor: PageCursor) -> DbResult<Vec<Payment>>;
    async fn create_payment(&self, input: &CreatePayment) -> DbResult<DbId>;
    async fn delete_payment(&self, id: DbId) -> DbResult<()>;

    // --- categories ---

    async fn all_categories(&self) -> DbResult<Vec<Category>>;
    async fn create_category(&self, input: &CreateCategory) -> DbResult<Category>;

    // --- comments ---

    async fn all_comments(&self, cursor: PageCursor) -> DbResult<Vec<Comment>>;
    async fn all_project_comments(
        &self,
        project_id: DbId,
        cursor: PageCursor,
    ) -> DbResult<Vec<Comment>>;
    async fn create_comment(&self, input: &CreateComment) -> DbResult<DbId>;
    async fn delete_comment(&self, id: DbId) -> DbResult<()>;
}
