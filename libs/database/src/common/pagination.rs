use serde::Serialize;
use utoipa::ToSchema;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Largest `LIMIT`/`OFFSET` Postgres accepts (a signed BIGINT).
pub const MAX_ROWS: u64 = i64::MAX as u64;

/// One-based page request. Both fields are positive and the page's first
/// row is addressable (`offset() <= MAX_ROWS`); callers validate untrusted
/// input through [`PageRequest::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Returns `None` when either value is zero, `limit` exceeds
    /// [`MAX_ROWS`] or the page starts past row [`MAX_ROWS`].
    pub fn new(page: u64, limit: u64) -> Option<Self> {
        if page == 0 || limit == 0 || limit > MAX_ROWS {
            return None;
        }
        let request = Self { page, limit };
        request.checked_offset().map(|_| request)
    }

    /// Number of rows to skip before this page starts, clamped to [`MAX_ROWS`].
    pub fn offset(&self) -> u64 {
        self.checked_offset().unwrap_or(MAX_ROWS)
    }

    /// Page size as bound into a query, clamped to [`MAX_ROWS`].
    pub fn row_limit(&self) -> u64 {
        self.limit.min(MAX_ROWS)
    }

    fn checked_offset(&self) -> Option<u64> {
        self.page
            .saturating_sub(1)
            .checked_mul(self.limit)
            .filter(|offset| *offset <= MAX_ROWS)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Paginated list envelope: `{data, total, page, limit, totalPages}`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            data,
            total,
            page: request.page,
            limit: request.limit,
            total_pages: total.div_ceil(request.limit),
        }
    }

    /// Converts every item while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}
