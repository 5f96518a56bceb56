//! Offset/limit pagination rules shared by every list endpoint.

use serde::Serialize;

/// Default page size for episode listing.
pub const DEFAULT_EPISODE_LIMIT: i64 = 20;

/// Default page size for character listing.
pub const DEFAULT_CHARACTER_LIMIT: i64 = 20;

/// Default page size for comment listing.
pub const DEFAULT_COMMENT_LIMIT: i64 = 25;

/// Default page size for user listing.
pub const DEFAULT_USER_LIMIT: i64 = 25;

/// Maximum page size for any list endpoint.
pub const MAX_LIMIT: i64 = 100;

/// A resolved offset/limit window, ready to be bound into a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Page {
    /// Resolve user-provided `skip`/`limit` against an entity's default size.
    pub fn new(skip: Option<i64>, limit: Option<i64>, default_limit: i64) -> Self {
        Self {
            skip: clamp_offset(skip),
            limit: clamp_limit(limit, default_limit, MAX_LIMIT),
        }
    }
}

/// Clamp a user-provided limit to `[0, max]`. A limit of 0 yields an empty page.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(0, max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
