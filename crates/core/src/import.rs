//! Parsing for the bulk reference-data import.
//!
//! The importer reads two JSON exports of the show wiki: a list of episodes
//! and a list of characters (each naming the episodes it appears in). This
//! module turns raw records into validated values; persistence and the
//! skip-and-log policy for malformed rows live in the database crate.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::character::{CharacterGender, CharacterStatus};
use crate::error::CoreError;
use crate::types::DbId;

/// Air-date formats accepted in episode exports, tried in order.
const AIR_DATE_FORMATS: &[&str] = &["%B %d, %Y", "%Y-%m-%d"];

// ---------------------------------------------------------------------------
// Raw records (as found in the JSON exports)
// ---------------------------------------------------------------------------

/// One episode as it appears in the episodes export.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEpisode {
    pub id: DbId,
    pub name: String,
    /// Long-form date, e.g. `"December 2, 2013"`.
    pub air_date: String,
    /// Season/episode code, e.g. `"S01E01"`.
    pub episode: String,
}

/// One character as it appears in the characters export.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCharacter {
    pub id: DbId,
    pub name: String,
    /// Capitalized in the export (`"Alive"`); normalized on parse.
    pub status: String,
    #[serde(default)]
    pub species: String,
    #[serde(rename = "type", default)]
    pub character_type: String,
    pub gender: String,
    /// Ids of the episodes this character appears in.
    #[serde(default)]
    pub episode: Vec<DbId>,
}

// ---------------------------------------------------------------------------
// Parsed records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEpisode {
    pub id: DbId,
    pub title: String,
    pub air_date: NaiveDate,
    pub season_number: i32,
    pub episode_number: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCharacter {
    pub id: DbId,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    pub character_type: String,
    pub gender: CharacterGender,
    pub episode_ids: Vec<DbId>,
}

impl TryFrom<RawEpisode> for ParsedEpisode {
    type Error = CoreError;

    fn try_from(raw: RawEpisode) -> Result<Self, Self::Error> {
        let air_date = parse_air_date(&raw.air_date)?;
        let (season_number, episode_number) = parse_episode_code(&raw.episode)?;
        Ok(Self {
            id: raw.id,
            title: raw.name,
            air_date,
            season_number,
            episode_number,
        })
    }
}

impl TryFrom<RawCharacter> for ParsedCharacter {
    type Error = CoreError;

    fn try_from(raw: RawCharacter) -> Result<Self, Self::Error> {
        let status = CharacterStatus::try_from(raw.status.to_lowercase())?;
        let gender = CharacterGender::try_from(raw.gender.to_lowercase())?;
        Ok(Self {
            id: raw.id,
            name: raw.name,
            status,
            species: raw.species,
            character_type: raw.character_type,
            gender,
            episode_ids: raw.episode,
        })
    }
}

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

/// Parse an episode air date such as `"December 2, 2013"` or `"2013-12-02"`.
pub fn parse_air_date(value: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = value.trim();
    AIR_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| CoreError::Validation(format!("Unrecognized air date '{value}'")))
}

/// Split a code such as `"S01E02"` into `(season, episode)` numbers.
pub fn parse_episode_code(code: &str) -> Result<(i32, i32), CoreError> {
    let invalid = || CoreError::Validation(format!("Invalid episode code '{code}'"));

    let upper = code.trim().to_ascii_uppercase();
    let rest = upper.strip_prefix('S').ok_or_else(invalid)?;
    let (season, episode) = rest.split_once('E').ok_or_else(invalid)?;

    let season: i32 = season.parse().map_err(|_| invalid())?;
    let episode: i32 = episode.parse().map_err(|_| invalid())?;
    if season < 1 || episode < 1 {
        return Err(invalid());
    }
    Ok((season, episode))
}
