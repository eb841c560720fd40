//! Shared pagination handling for list endpoints.

/// Default page size when the caller does not specify `limit`.
pub const DEFAULT_LIMIT: i64 = 50;

/// Upper bound on page size.
pub const MAX_LIMIT: i64 = 200;

/// Clamp raw `limit`/`offset` query values into safe bounds.
pub fn page(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = offset.unwrap_or(0).max(0);
    (limit, offset)
}
