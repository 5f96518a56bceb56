//! Episode entity model, DTOs and list filter.

use chrono::NaiveDate;
use rickmorty_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `episodes` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Episode {
    pub id: DbId,
    pub title: String,
    pub air_date: NaiveDate,
    pub episode_number: i32,
    pub season_number: i32,
}

/// DTO for inserting or replacing an episode. Ids come from the source data.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEpisode {
    pub id: DbId,
    pub title: String,
    pub air_date: NaiveDate,
    pub episode_number: i32,
    pub season_number: i32,
}

/// Optional criteria for `GET /episodes`. Every absent field is a no-op.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EpisodeFilter {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    /// Strictly earlier than this date.
    pub before_air_date: Option<NaiveDate>,
    /// Strictly later than this date.
    pub after_air_date: Option<NaiveDate>,
    pub episode_number: Option<i32>,
    pub season_number: Option<i32>,
    /// Case-insensitive substring of a character appearing in the episode.
    pub character_name: Option<String>,
}
