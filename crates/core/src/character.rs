//! Closed enumerations describing a character.
//!
//! Both are persisted as lowercase strings and serialized the same way, so the
//! stored value, the query-string value and the JSON value always agree.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Whether a character is alive at the end of the show's canon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterStatus {
    Alive,
    Dead,
    Unknown,
}

impl CharacterStatus {
    /// Return the status name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alive => "alive",
            Self::Dead => "dead",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a stored status string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "alive" => Some(Self::Alive),
            "dead" => Some(Self::Dead),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// All valid status values.
    pub const ALL: &'static [&'static str] = &["alive", "dead", "unknown"];
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CharacterStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
            .ok_or_else(|| CoreError::Validation(format!("Unknown character status '{value}'")))
    }
}

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// A character's gender as catalogued by the show wiki.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterGender {
    Male,
    Female,
    Genderless,
    Unknown,
}

impl CharacterGender {
    /// Return the gender name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Genderless => "genderless",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a stored gender string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "genderless" => Some(Self::Genderless),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// All valid gender values.
    pub const ALL: &'static [&'static str] = &["male", "female", "genderless", "unknown"];
}

impl std::fmt::Display for CharacterGender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CharacterGender {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
            .ok_or_else(|| CoreError::Validation(format!("Unknown character gender '{value}'")))
    }
}
