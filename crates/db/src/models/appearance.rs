//! Appearance join model linking episodes and characters.

use rickmorty_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `appearances` junction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct Appearance {
    pub episode_id: DbId,
    pub character_id: DbId,
}
