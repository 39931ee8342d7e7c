//! Stateless repositories, one per table. Every function takes the pool
//! explicitly so callers decide which connection handle to use.

pub mod category_repo;
pub mod comment_repo;
pub mod payment_repo;
pub mod project_repo;
pub mod stats_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use comment_repo::CommentRepo;
pub use payment_repo::PaymentRepo;
pub use project_repo::ProjectRepo;
pub use stats_repo::StatsRepo;
pub use user_repo::UserRepo;
