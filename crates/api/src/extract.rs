//! Request extractors with this API's lenient/strict rules.
//!
//! - [`JsonBody`] rejects anything that does not decode into the target
//!   schema with a 400 (axum's `Json` would answer 415/422).
//! - [`Pagination`] and [`SearchTerm`] never reject. Each query key is read
//!   on its own and a repeated key contributes its first value.
//! - [`parse_id`] turns a bad id segment into a 404.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::http::Uri;
use givingchy_core::pagination::PageCursor;
use givingchy_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Parse an `{id}` path segment as a positive integer.
///
/// Anything else answers `404 No such <entity> id`.
pub fn parse_id(raw: &str, entity: &str) -> AppResult<DbId> {
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::NotFound(format!("No such {entity} id"))),
    }
}

/// A JSON request body decoded with `serde_json`.
///
/// Only the first JSON value is read; anything after it is ignored. The
/// Content-Type header is not inspected. Unknown fields are rejected by the
/// target types themselves (`#[serde(deny_unknown_fields)]`).
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        match serde_json::Deserializer::from_slice(&bytes)
            .into_iter::<T>()
            .next()
        {
            Some(Ok(value)) => Ok(JsonBody(value)),
            Some(Err(e)) => Err(AppError::BadRequest(e.to_string())),
            None => Err(AppError::BadRequest("EOF".into())),
        }
    }
}

/// Every `key=value` pair of the query string, in order.
fn query_pairs(uri: &Uri) -> Vec<(String, String)> {
    Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map(|Query(pairs)| pairs)
        .unwrap_or_default()
}

/// The first value given for `key`, if any.
fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// `?page=&limit=` as a [`PageCursor`], defaulting silently.
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageCursor);

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = query_pairs(&parts.uri);
        Ok(Pagination(PageCursor::from_raw(
            first_value(&pairs, "limit"),
            first_value(&pairs, "page"),
        )))
    }
}

/// Optional `?search=` term; an empty value counts as absent.
#[derive(Debug, Clone)]
pub struct SearchTerm(pub Option<String>);

impl<S> FromRequestParts<S> for SearchTerm
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = query_pairs(&parts.uri);
        Ok(SearchTerm(
            first_value(&pairs, "search")
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
        ))
    }
}
