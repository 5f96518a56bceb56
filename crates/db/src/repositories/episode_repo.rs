//! Repository for the `episodes` table.

use rickmorty_core::pagination::{Page, DEFAULT_EPISODE_LIMIT};
use rickmorty_core::types::DbId;
use sqlx::sqlite::SqliteExecutor;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::{contains_pattern, push_page, Predicates};
use crate::models::episode::{CreateEpisode, Episode, EpisodeFilter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, air_date, episode_number, season_number";

/// Column list qualified with the `e` alias, for joined queries.
const E_COLUMNS: &str = "e.id, e.title, e.air_date, e.episode_number, e.season_number";

/// Provides read access and import upserts for episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Insert an episode, or replace every field of the row with the same id.
    pub async fn upsert<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreateEpisode,
    ) -> Result<Episode, sqlx::Error> {
        let query = format!(
            "INSERT INTO episodes (id, title, air_date, episode_number, season_number)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE SET
                title = excluded.title,
                air_date = excluded.air_date,
                episode_number = excluded.episode_number,
                season_number = excluded.season_number
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(input.id)
            .bind(&input.title)
            .bind(input.air_date)
            .bind(input.episode_number)
            .bind(input.season_number)
            .fetch_one(executor)
            .await
    }

    /// Find an episode by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE id = $1");
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether an episode with the given id exists.
    pub async fn exists(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let found: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM episodes WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(found.is_some())
    }

    /// List episodes matching every present criterion, ordered by id.
    ///
    /// `character_name` first resolves the ids of characters whose name
    /// contains it (case-insensitively), then keeps episodes linked to any of
    /// them through `appearances`. Air-date bounds are strict.
    pub async fn list(
        pool: &SqlitePool,
        filter: &EpisodeFilter,
    ) -> Result<Vec<Episode>, sqlx::Error> {
        let page = Page::new(filter.skip, filter.limit, DEFAULT_EPISODE_LIMIT);

        let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT {COLUMNS} FROM episodes"));
        let mut predicates = Predicates::default();

        if let Some(before) = filter.before_air_date {
            predicates.and(&mut qb).push("air_date < ").push_bind(before);
        }
        if let Some(after) = filter.after_air_date {
            predicates.and(&mut qb).push("air_date > ").push_bind(after);
        }
        if let Some(number) = filter.episode_number {
            predicates
                .and(&mut qb)
                .push("episode_number = ")
                .push_bind(number);
        }
        if let Some(season) = filter.season_number {
            predicates
                .and(&mut qb)
                .push("season_number = ")
                .push_bind(season);
        }
        if let Some(name) = filter.character_name.as_deref() {
            predicates
                .and(&mut qb)
                .push(
                    "id IN (SELECT a.episode_id FROM appearances a \
                     WHERE a.character_id IN (SELECT c.id FROM characters c \
                     WHERE LOWER(c.name) LIKE LOWER(",
                )
                .push_bind(contains_pattern(name))
                .push(") ESCAPE '\\'))");
        }

        push_page(&mut qb, "id", page);

        qb.build_query_as::<Episode>().fetch_all(pool).await
    }

    /// List every episode a character appears in, ordered by id.
    pub async fn list_for_character(
        pool: &SqlitePool,
        character_id: DbId,
    ) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!(
            "SELECT {E_COLUMNS} FROM episodes e
             JOIN appearances a ON a.episode_id = e.id
             WHERE a.character_id = $1
             ORDER BY e.id"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(character_id)
            .fetch_all(pool)
            .await
    }
}
