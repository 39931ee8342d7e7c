//! PostgreSQL-backed [`Datastore`].

use async_trait::async_trait;
use givingchy_core::error::CoreError;
use givingchy_core::pagination::PageCursor;
use givingchy_core::password::{hash_password, verify_password};
use givingchy_core::types::DbId;

use crate::datastore::Datastore;
use crate::error::{DbError, DbResult};
use crate::models::category::{Category, CreateCategory};
use crate::models::comment::{Comment, CreateComment};
use crate::models::payment::{CreatePayment, Payment};
use crate::models::project::{CreateProject, Project, ReplaceProject};
use crate::models::stats::Statistics;
use crate::models::user::{CreateUser, User};
use crate::repositories::{
    CategoryRepo, CommentRepo, PaymentRepo, ProjectRepo, StatsRepo, UserRepo,
};
use crate::DbPool;

/// PostgreSQL unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

const INVALID_CREDENTIALS: &str = "invalid email or password";

/// [`Datastore`] implementation over a shared connection pool.
#[derive(Clone)]
pub struct PgDatastore {
    pool: DbPool,
}

impl PgDatastore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn not_found(entity: &'static str, id: DbId) -> CoreError {
    CoreError::NotFound { entity, id }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION))
}

#[async_trait]
impl Datastore for PgDatastore {
    async fn ping(&self) -> DbResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn all_statistics(&self) -> DbResult<Statistics> {
        Ok(StatsRepo::all(&self.pool).await?)
    }

    async fn all_projects(&self, cursor: PageCursor) -> DbResult<Vec<Project>> {
        Ok(ProjectRepo::list(&self.pool, cursor).await?)
    }

    async fn search_projects(&self, term: &str, cursor: PageCursor) -> DbResult<Vec<Project>> {
        Ok(ProjectRepo::search(&self.pool, term, cursor).await?)
    }

    async fn get_project(&self, id: DbId) -> DbResult<Project> {
        ProjectRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| not_found("Project", id).into())
    }

    async fn create_project(&self, input: &CreateProject) -> DbResult<DbId> {
        let id = ProjectRepo::create(&self.pool, input).await?;
        tracing::debug!(project_id = id, user_id = input.user_id, "Project created");
        Ok(id)
    }

    async fn replace_project(&self, id: DbId, input: &ReplaceProject) -> DbResult<()> {
        if ProjectRepo::replace(&self.pool, id, input).await? {
            Ok(())
        } else {
            Err(not_found("Project", id).into())
        }
    }

    async fn all_users(&self, cursor: PageCursor) -> DbResult<Vec<User>> {
        Ok(UserRepo::list(&self.pool, cursor).await?)
    }

    async fn get_user(&self, email: &str, password: &str) -> DbResult<User> {
        let credentials = UserRepo::find_credentials_by_email(&self.pool, email)
            .await?
            .ok_or_else(|| CoreError::Unauthorized(INVALID_CREDENTIALS.into()))?;

        let valid = verify_password(password, &credentials.password_hash)
            .map_err(|e| CoreError::Internal(format!("password verification error: {e}")))?;
        if !valid {
            return Err(CoreError::Unauthorized(INVALID_CREDENTIALS.into()).into());
        }

        Ok(credentials.into())
    }

    async fn create_user(&self, input: &CreateUser) -> DbResult<User> {
        let password_hash = hash_password(&input.password)
            .map_err(|e| CoreError::Internal(format!("password hashing error: {e}")))?;

        let user = UserRepo::create(
            &self.pool,
            &input.email,
            &password_hash,
            &input.username,
            &input.image,
        )
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                CoreError::Conflict(format!("email {} is already registered", input.email)).into()
            } else {
                DbError::from(e)
            }
        })?;

        tracing::debug!(user_id = user.id, "User registered");
        Ok(user)
    }

    async fn all_payments(&self, cursor: PageCursor) -> DbResult<Vec<Payment>> {
        Ok(PaymentRepo::list(&self.pool, cursor).await?)
    }

    async fn create_payment(&self, input: &CreatePayment) -> DbResult<DbId> {
        Ok(PaymentRepo::create(&self.pool, input).await?)
    }

    async fn delete_payment(&self, id: DbId) -> DbResult<()> {
        if PaymentRepo::delete(&self.pool, id).await? {
            Ok(())
        } else {
            Err(not_found("Payment", id).into())
        }
    }

    async fn all_categories(&self) -> DbResult<Vec<Category>> {
        Ok(CategoryRepo::list(&self.pool).await?)
    }

    async fn create_category(&self, input: &CreateCategory) -> DbResult<Category> {
        CategoryRepo::create(&self.pool, &input.name)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    CoreError::Conflict(format!("category {} already exists", input.name)).into()
                } else {
                    DbError::from(e)
                }
            })
    }

    async fn all_comments(&self, cursor: PageCursor) -> DbResult<Vec<Comment>> {
        Ok(CommentRepo::list(&self.pool, cursor).await?)
    }

    async fn all_project_comments(
        &self,
        project_id: DbId,
        cursor: PageCursor,
    ) -> DbResult<Vec<Comment>> {
        Ok(CommentRepo::list_by_project(&self.pool, project_id, cursor).await?)
    }

    async fn create_comment(&self, input: &CreateComment) -> DbResult<DbId> {
        Ok(CommentRepo::create(&self.pool, input).await?)
    }

    async fn delete_comment(&self, id: DbId) -> DbResult<()> {
        if CommentRepo::delete(&self.pool, id).await? {
            Ok(())
        } else {
            Err(not_found("Comment", id).into())
        }
    }
}
