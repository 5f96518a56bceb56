//! Comment entity model, DTOs and list filter.

use rickmorty_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comments` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub content: String,
    pub episode_id: Option<DbId>,
    pub character_id: Option<DbId>,
    pub user_id: DbId,
}

/// DTO for creating a comment. The owner is always the authenticated caller,
/// so any `user_id` in the request body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub content: String,
    pub episode_id: Option<DbId>,
    pub character_id: Option<DbId>,
}

/// DTO for updating a comment. Only the content can change.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateComment {
    pub content: String,
}

/// Optional criteria for `GET /comments`. Every absent field is a no-op.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentFilter {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub episode_id: Option<DbId>,
    pub character_id: Option<DbId>,
    pub user_id: Option<DbId>,
}
