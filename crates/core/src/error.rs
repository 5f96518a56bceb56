//! Domain error taxonomy. Every variant maps to exactly one HTTP status in
//! the API layer.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row with this id exists for the named entity (`"Episode"`, `"User"`, ...).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input was well-formed but breaks a domain rule.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A unique field (username, email) is already taken.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing, wrong, or expired credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Credentials are valid but the account may not act.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound { entity, id }
    }
}
