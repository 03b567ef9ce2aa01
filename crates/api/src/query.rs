//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Default and maximum page sizes for list endpoints.
pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Clamp the limit into `1..=MAX_LIMIT`, defaulting to [`DEFAULT_LIMIT`].
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Clamp the offset to be non-negative.
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}
