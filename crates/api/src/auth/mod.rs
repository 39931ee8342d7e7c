//! Session token issuance.
//!
//! - [`jwt`] -- HS256 bearer tokens handed out on login and registration.

pub mod jwt;
