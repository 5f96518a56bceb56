//! Repository for the `appearances` junction table.

use rickmorty_core::types::DbId;
use sqlx::sqlite::SqliteExecutor;
use sqlx::SqlitePool;

use crate::models::appearance::Appearance;

/// Links episodes and characters.
pub struct AppearanceRepo;

impl AppearanceRepo {
    /// Record that a character appears in an episode.
    ///
    /// Returns `true` if a new link was created, `false` if it already
    /// existed. Fails with a foreign-key error if either side is missing.
    pub async fn link<'e>(
        executor: impl SqliteExecutor<'e>,
        episode_id: DbId,
        character_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO appearances (episode_id, character_id) VALUES ($1, $2)
             ON CONFLICT (episode_id, character_id) DO NOTHING",
        )
        .bind(episode_id)
        .bind(character_id)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every link, ordered by episode then character.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Appearance>, sqlx::Error> {
        sqlx::query_as::<_, Appearance>(
            "SELECT episode_id, character_id FROM appearances
             ORDER BY episode_id, character_id",
        )
        .fetch_all(pool)
        .await
    }
}
