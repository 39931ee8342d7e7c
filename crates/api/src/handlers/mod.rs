pub mod auth;
pub mod category;
pub mod comment;
pub mod health;
pub mod payment;
pub mod project;
pub mod stats;
pub mod user;
