pub mod category;
pub mod comment;
pub mod payment;
pub mod project;
pub mod stats;
pub mod user;
