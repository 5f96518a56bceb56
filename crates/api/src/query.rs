//! Shared query parameter types for API handlers.

use rickmorty_core::types::DbId;
use serde::Deserialize;

/// Generic pagination parameters (`?skip=&limit=`).
///
/// Values are clamped in the repository layer via `Page::new`.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// A required `?id=` selector, used by `DELETE /users`.
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: DbId,
}
