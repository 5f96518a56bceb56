//! Character entity model, DTOs and list filter.

use rickmorty_core::character::{CharacterGender, CharacterStatus};
use rickmorty_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `characters` table.
///
/// `status` and `gender` are stored as lowercase text and decoded into the
/// closed enums; a row holding any other value fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub status: CharacterStatus,
    pub species: String,
    pub character_type: String,
    #[sqlx(try_from = "String")]
    pub gender: CharacterGender,
}

/// DTO for inserting or replacing a character. Ids come from the source data.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub id: DbId,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    pub character_type: String,
    pub gender: CharacterGender,
}

/// Optional criteria for `GET /characters`. Every absent field is a no-op.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterFilter {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<CharacterStatus>,
    pub species: Option<String>,
    pub character_type: Option<String>,
    pub gender: Option<CharacterGender>,
    /// Case-insensitive substring of the title of an episode the character is in.
    pub episode_name: Option<String>,
}
