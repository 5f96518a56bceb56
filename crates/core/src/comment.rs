//! Rules for user-submitted comments.

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length of a comment body, in characters.
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Check that a comment body is non-blank and within the size limit.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Comment content must not be empty".into()));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Comment content must be at most {MAX_CONTENT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// A comment must point at an episode, a character, or both.
pub fn validate_target(
    episode_id: Option<DbId>,
    character_id: Option<DbId>,
) -> Result<(), CoreError> {
    if episode_id.is_none() && character_id.is_none() {
        return Err(CoreError::Validation(
            "A comment must reference an episode_id, a character_id, or both".into(),
        ));
    }
    Ok(())
}
