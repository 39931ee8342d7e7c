//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router (same middleware stack as production) against
//! [`MemoryDatastore`], an in-memory substitute that mirrors the Postgres
//! datastore's ordering, foreign-key and not-found behaviour.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use givingchy_api::auth::jwt::{Claims, JwtConfig, ISSUER};
use givingchy_api::config::ServerConfig;
use givingchy_api::router::build_app_router;
use givingchy_api::state::AppState;
use givingchy_core::error::CoreError;
use givingchy_core::pagination::PageCursor;
use givingchy_core::types::DbId;
use givingchy_db::models::category::{Category, CreateCategory};
use givingchy_db::models::comment::{Comment, CreateComment};
use givingchy_db::models::payment::{CreatePayment, Payment};
use givingchy_db::models::project::{CreateProject, Project, ReplaceProject};
use givingchy_db::models::stats::Statistics;
use givingchy_db::models::user::{CreateUser, User};
use givingchy_db::{Datastore, DbResult};
use http_body_util::BodyExt;
use jsonwebtoken::{decode, DecodingKey, Validation};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiry_secs: 15_000,
        },
    }
}

/// Build the full application router over the given datastore.
pub fn build_test_app(datastore: Arc<dyn Datastore>) -> Router {
    let config = test_config();
    let state = AppState::new(datastore, config.clone());
    build_app_router(state, &config)
}

/// Router over a fresh, empty [`MemoryDatastore`].
pub fn empty_app() -> (Router, Arc<MemoryDatastore>) {
    let store = Arc::new(MemoryDatastore::default());
    (build_test_app(store.clone()), store)
}

/// Decode a token issued by the test app, checking signature, expiry and
/// issuer.
pub fn decode_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[ISSUER]);
    decode::<Claims>(token, &DecodingKey::from_secret(TEST_SECRET.as_bytes()), &validation)
        .map(|data| data.claims)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

pub async fn post_raw(app: Router, uri: &str, raw: &'static str) -> Response {
    send(app, Method::POST, uri, Body::from(raw)).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the response is `status` with an `{"error": ...}` body, returning the message.
pub async fn expect_error(response: Response, status: StatusCode) -> String {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    json["error"]
        .as_str()
        .expect("error body must carry an `error` string")
        .to_string()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn project_body(user_id: DbId, title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "userId": user_id,
        "category": "Health",
        "description": format!("{title} description"),
        "image": "i",
        "amountRequired": 100.0,
        "endTime": "2025-01-01T00:00:00Z",
    })
}

/// A store holding one user (id 1, `ada@example.com` / `s3cret`) and the
/// `Health` category.
pub fn seeded_store() -> Arc<MemoryDatastore> {
    let store = MemoryDatastore::default();
    store.seed_user("ada@example.com", "s3cret", "ada", false);
    store.seed_category("Health");
    Arc::new(store)
}

/// [`seeded_store`] plus `count` projects owned by user 1, titled
/// `Project 1..=count`.
pub fn store_with_projects(count: usize) -> Arc<MemoryDatastore> {
    let store = seeded_store();
    for n in 1..=count {
        store.seed_project(1, &format!("Project {n}"));
    }
    store
}

// ---------------------------------------------------------------------------
// In-memory datastore
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct StoredUser {
    user: User,
    password: String,
}

#[derive(Default)]
struct Tables {
    users: Vec<StoredUser>,
    projects: Vec<Project>,
    payments: Vec<Payment>,
    categories: Vec<Category>,
    comments: Vec<Comment>,
    next_id: DbId,
}

impl Tables {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn require_user(&self, id: DbId) -> DbResult<()> {
        if self.users.iter().any(|u| u.user.id == id) {
            Ok(())
        } else {
            Err(CoreError::Internal(format!("foreign key violation: user {id} does not exist")).into())
        }
    }

    fn require_project(&self, id: DbId) -> DbResult<()> {
        if self.projects.iter().any(|p| p.id == id) {
            Ok(())
        } else {
            Err(
                CoreError::Internal(format!("foreign key violation: project {id} does not exist"))
                    .into(),
            )
        }
    }

    fn require_category(&self, name: &str) -> DbResult<()> {
        if self.categories.iter().any(|c| c.name == name) {
            Ok(())
        } else {
            Err(
                CoreError::Internal(format!("foreign key violation: category {name} does not exist"))
                    .into(),
            )
        }
    }
}

fn page<T: Clone>(rows: impl Iterator<Item = T>, cursor: PageCursor) -> Vec<T> {
    rows.skip(cursor.offset() as usize)
        .take(cursor.limit() as usize)
        .collect()
}

/// In-memory [`Datastore`] for tests. Ids come from one shared sequence.
#[derive(Default)]
pub struct MemoryDatastore {
    tables: Mutex<Tables>,
}

impl MemoryDatastore {
    pub fn seed_user(&self, email: &str, password: &str, username: &str, is_admin: bool) -> DbId {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        t.users.push(StoredUser {
            user: User {
                id,
                email: email.to_string(),
                username: username.to_string(),
                image: format!("{username}.png"),
                is_admin,
            },
            password: password.to_string(),
        });
        id
    }

    pub fn seed_category(&self, name: &str) -> DbId {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        t.categories.push(Category {
            id,
            name: name.to_string(),
        });
        id
    }

    pub fn seed_project(&self, user_id: DbId, title: &str) -> DbId {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_id();
        t.projects.push(Project {
            id,
            title: title.to_string(),
            user_id,
            category: "Health".to_string(),
            description: format!("{title} description"),
            image: "i".to_string(),
            verified: false,
            amount_required: 100.0,
            end_time: "2025-01-01T00:00:00Z".parse().unwrap(),
        });
        id
    }

    pub fn project(&self, id: DbId) -> Option<Project> {
        let t = self.tables.lock().unwrap();
        t.projects.iter().find(|p| p.id == id).cloned()
    }

    pub fn payment_count(&self) -> usize {
        self.tables.lock().unwrap().payments.len()
    }

    pub fn comment_count(&self) -> usize {
        self.tables.lock().unwrap().comments.len()
    }
}

#[async_trait]
impl Datastore for MemoryDatastore {
    async fn ping(&self) -> DbResult<()> {
        Ok(())
    }

    async fn all_statistics(&self) -> DbResult<Statistics> {
        let t = self.tables.lock().unwrap();
        Ok(Statistics {
            project_count: t.projects.len() as i64,
            verified_project_count: t.projects.iter().filter(|p| p.verified).count() as i64,
            user_count: t.users.len() as i64,
            payment_count: t.payments.len() as i64,
            comment_count: t.comments.len() as i64,
            amount_raised: t.payments.iter().map(|p| p.amount).sum(),
        })
    }

    async fn all_projects(&self, cursor: PageCursor) -> DbResult<Vec<Project>> {
        let t = self.tables.lock().unwrap();
        Ok(page(t.projects.iter().cloned(), cursor))
    }

    async fn search_projects(&self, term: &str, cursor: PageCursor) -> DbResult<Vec<Project>> {
        let t = self.tables.lock().unwrap();
        let needle = term.to_lowercase();
        let hits = t.projects.iter().filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        });
        Ok(page(hits.cloned(), cursor))
    }

    async fn get_project(&self, id: DbId) -> DbResult<Project> {
        let t = self.tables.lock().unwrap();
        t.projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound { entity: "Project", id }.into())
    }

    async fn create_project(&self, input: &CreateProject) -> DbResult<DbId> {
        let mut t = self.tables.lock().unwrap();
        t.require_user(input.user_id)?;
        t.require_category(&input.category)?;
        let id = t.next_id();
        t.projects.push(Project {
            id,
            title: input.title.clone(),
            user_id: input.user_id,
            category: input.category.clone(),
            description: input.description.clone(),
            image: input.image.clone(),
            verified: false,
            amount_required: input.amount_required,
            end_time: input.end_time,
        });
        Ok(id)
    }

    async fn replace_project(&self, id: DbId, input: &ReplaceProject) -> DbResult<()> {
        let mut t = self.tables.lock().unwrap();
        t.require_user(input.user_id)?;
        t.require_category(&input.category)?;
        let project = t
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CoreError::NotFound { entity: "Project", id })?;
        *project = Project {
            id,
            title: input.title.clone(),
            user_id: input.user_id,
            category: input.category.clone(),
            description: input.description.clone(),
            image: input.image.clone(),
            verified: input.verified,
            amount_required: input.amount_required,
            end_time: input.end_time,
        };
        Ok(())
    }

    async fn all_users(&self, cursor: PageCursor) -> DbResult<Vec<User>> {
        let t = self.tables.lock().unwrap();
        Ok(page(t.users.iter().map(|u| u.user.clone()), cursor))
    }

    async fn get_user(&self, email: &str, password: &str) -> DbResult<User> {
        let t = self.tables.lock().unwrap();
        t.users
            .iter()
            .find(|u| u.user.email == email && u.password == password)
            .map(|u| u.user.clone())
            .ok_or_else(|| CoreError::Unauthorized("invalid email or password".into()).into())
    }

    async fn create_user(&self, input: &CreateUser) -> DbResult<User> {
        let mut t = self.tables.lock().unwrap();
        if t.users.iter().any(|u| u.user.email == input.email) {
            return Err(
                CoreError::Conflict(format!("email {} is already registered", input.email)).into(),
            );
        }
        let id = t.next_id();
        let user = User {
            id,
            email: input.email.clone(),
            username: input.username.clone(),
            image: input.image.clone(),
            is_admin: false,
        };
        t.users.push(StoredUser {
            user: user.clone(),
            password: input.password.clone(),
        });
        Ok(user)
    }

    async fn all_payments(&self, cursor: PageCursor) -> DbResult<Vec<Payment>> {
        let t = self.tables.lock().unwrap();
        Ok(page(t.payments.iter().cloned(), cursor))
    }

    async fn create_payment(&self, input: &CreatePayment) -> DbResult<DbId> {
        let mut t = self.tables.lock().unwrap();
        t.require_user(input.user_id)?;
        t.require_project(input.project_id)?;
        let id = t.next_id();
        t.payments.push(Payment {
            id,
            user_id: input.user_id,
            project_id: input.project_id,
            amount: input.amount,
        });
        Ok(id)
    }

    async fn delete_payment(&self, id: DbId) -> DbResult<()> {
        let mut t = self.tables.lock().unwrap();
        let before = t.payments.len();
        t.payments.retain(|p| p.id != id);
        if t.payments.len() == before {
            return Err(CoreError::NotFound { entity: "Payment", id }.into());
        }
        Ok(())
    }

    async fn all_categories(&self) -> DbResult<Vec<Category>> {
        let t = self.tables.lock().unwrap();
        let mut categories = t.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn create_category(&self, input: &CreateCategory) -> DbResult<Category> {
        let mut t = self.tables.lock().unwrap();
        if t.categories.iter().any(|c| c.name == input.name) {
            return Err(CoreError::Conflict(format!("category {} already exists", input.name)).into());
        }
        let category = Category {
            id: t.next_id(),
            name: input.name.clone(),
        };
        t.categories.push(category.clone());
        Ok(category)
    }

    async fn all_comments(&self, cursor: PageCursor) -> DbResult<Vec<Comment>> {
        let t = self.tables.lock().unwrap();
        Ok(page(t.comments.iter().rev().cloned(), cursor))
    }

    async fn all_project_comments(
        &self,
        project_id: DbId,
        cursor: PageCursor,
    ) -> DbResult<Vec<Comment>> {
        let t = self.tables.lock().unwrap();
        let rows = t
            .comments
            .iter()
            .rev()
            .filter(|c| c.project_id == project_id)
            .cloned();
        Ok(page(rows, cursor))
    }

    async fn create_comment(&self, input: &CreateComment) -> DbResult<DbId> {
        let mut t = self.tables.lock().unwrap();
        t.require_user(input.user_id)?;
        t.require_project(input.project_id)?;
        let id = t.next_id();
        t.comments.push(Comment {
            id,
            user_id: input.user_id,
            project_id: input.project_id,
            content: input.content.clone(),
            created: chrono::Utc::now(),
        });
        Ok(id)
    }

    async fn delete_comment(&self, id: DbId) -> DbResult<()> {
        let mut t = self.tables.lock().unwrap();
        let before = t.comments.len();
        t.comments.retain(|c| c.id != id);
        if t.comments.len() == before {
            return Err(CoreError::NotFound { entity: "Comment", id }.into());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Faulty datastore
// ---------------------------------------------------------------------------

/// A datastore whose every operation panics, for exercising panic recovery.
pub struct PanickingDatastore;

#[async_trait]
impl Datastore for PanickingDatastore {
    async fn ping(&self) -> DbResult<()> {
        panic!("ping exploded")
    }
    async fn all_statistics(&self) -> DbResult<Statistics> {
        panic!("statistics exploded")
    }
    async fn all_projects(&self, _cursor: PageCursor) -> DbResult<Vec<Project>> {
        panic!("projects exploded")
    }
    async fn search_projects(&self, _term: &str, _cursor: PageCursor) -> DbResult<Vec<Project>> {
        panic!("search exploded")
    }
    async fn get_project(&self, _id: DbId) -> DbResult<Project> {
        panic!("get project exploded")
    }
    async fn create_project(&self, _input: &CreateProject) -> DbResult<DbId> {
        panic!("create project exploded")
    }
    async fn replace_project(&self, _id: DbId, _input: &ReplaceProject) -> DbResult<()> {
        panic!("replace project exploded")
    }
    async fn all_users(&self, _cursor: PageCursor) -> DbResult<Vec<User>> {
        panic!("users exploded")
    }
    async fn get_user(&self, _email: &str, _password: &str) -> DbResult<User> {
        panic!("get user exploded")
    }
    async fn create_user(&self, _input: &CreateUser) -> DbResult<User> {
        panic!("create user exploded")
    }
    async fn all_payments(&self, _cursor: PageCursor) -> DbResult<Vec<Payment>> {
        panic!("payments exploded")
    }
    async fn create_payment(&self, _input: &CreatePayment) -> DbResult<DbId> {
        panic!("create payment exploded")
    }
    async fn delete_payment(&self, _id: DbId) -> DbResult<()> {
        panic!("delete payment exploded")
    }
    async fn all_categories(&self) -> DbResult<Vec<Category>> {
        panic!("categories exploded")
    }
    async fn create_category(&self, _input: &CreateCategory) -> DbResult<Category> {
        panic!("create category exploded")
    }
    async fn all_comments(&self, _cursor: PageCursor) -> DbResult<Vec<Comment>> {
        panic!("comments exploded")
    }
    async fn all_project_comments(
        &self,
        _project_id: DbId,
        _cursor: PageCursor,
    ) -> DbResult<Vec<Comment>> {
        panic!("project comments exploded")
    }
    async fn create_comment(&self, _input: &CreateComment) -> DbResult<DbId> {
        panic!("create comment exploded")
    }
    async fn delete_comment(&self, _id: DbId) -> DbResult<()> {
        panic!("delete comment exploded")
    }
}
