//! Pagination cursor shared by list endpoints and datastore implementations.
//!
//! The HTTP layer only forwards what the client asked for (falling back to
//! the defaults on absent or malformed input). Turning a cursor into SQL
//! `LIMIT`/`OFFSET` values is the datastore's job, via [`PageCursor::limit`]
//! and [`PageCursor::offset`].

/// Items per page when `limit` is absent or unparsable.
pub const DEFAULT_PER_PAGE: i64 = 10;
/// Page index (1-based) when `page` is absent or unparsable.
pub const DEFAULT_PAGE: i64 = 1;
/// Upper bound applied by datastores to a single page.
pub const MAX_PER_PAGE: i64 = 100;

/// The `(itemsPerPage, pageIndex)` pair derived from `limit` / `page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub per_page: i64,
    pub page: i64,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            page: DEFAULT_PAGE,
        }
    }
}

impl PageCursor {
    pub fn new(per_page: i64, page: i64) -> Self {
        Self { per_page, page }
    }

    /// Build a cursor from raw query-string values, silently falling back to
    /// the defaults for anything that is missing or not an integer.
    pub fn from_raw(limit: Option<&str>, page: Option<&str>) -> Self {
        let per_page = limit
            .and_then(|l| l.parse().ok())
            .unwrap_or(DEFAULT_PER_PAGE);
        let page = page.and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PAGE);
        Self { per_page, page }
    }

    /// Row limit, clamped to `1..=MAX_PER_PAGE`.
    pub fn limit(&self) -> i64 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }

    /// Row offset for the requested page; pages below 1 read the first page.
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.limit())
    }
}
