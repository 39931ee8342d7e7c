//! Domain primitives shared by the datastore and the HTTP layer.

pub mod error;
pub mod pagination;
pub mod password;
pub mod types;
