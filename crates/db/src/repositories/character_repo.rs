//! Repository for the `characters` table.

use rickmorty_core::pagination::{Page, DEFAULT_CHARACTER_LIMIT};
use rickmorty_core::types::DbId;
use sqlx::sqlite::SqliteExecutor;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::{contains_pattern, push_page, Predicates};
use crate::models::character::{Character, CharacterFilter, CreateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, status, species, character_type, gender";

/// Column list qualified with the `c` alias, for joined queries.
const C_COLUMNS: &str = "c.id, c.name, c.status, c.species, c.character_type, c.gender";

/// Provides read access and import upserts for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a character, or replace every field of the row with the same id.
    pub async fn upsert<'e>(
        executor: impl SqliteExecutor<'e>,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (id, name, status, species, character_type, gender)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                status = excluded.status,
                species = excluded.species,
                character_type = excluded.character_type,
                gender = excluded.gender
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(input.status.as_str())
            .bind(&input.species)
            .bind(&input.character_type)
            .bind(input.gender.as_str())
            .fetch_one(executor)
            .await
    }

    /// Find a character by id.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a character with the given id exists.
    pub async fn exists(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let found: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM characters WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(found.is_some())
    }

    /// List characters matching every present criterion, ordered by id.
    ///
    /// `species` and `character_type` are exact matches. `episode_name` first
    /// resolves the ids of episodes whose title contains it
    /// (case-insensitively), then keeps characters linked to any of them
    /// through `appearances`.
    pub async fn list(
        pool: &SqlitePool,
        filter: &CharacterFilter,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let page = Page::new(filter.skip, filter.limit, DEFAULT_CHARACTER_LIMIT);

        let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT {COLUMNS} FROM characters"));
        let mut predicates = Predicates::default();

        if let Some(status) = filter.status {
            predicates
                .and(&mut qb)
                .push("status = ")
                .push_bind(status.as_str());
        }
        if let Some(species) = filter.species.clone() {
            predicates.and(&mut qb).push("species = ").push_bind(species);
        }
        if let Some(character_type) = filter.character_type.clone() {
            predicates
                .and(&mut qb)
                .push("character_type = ")
                .push_bind(character_type);
        }
        if let Some(gender) = filter.gender {
            predicates
                .and(&mut qb)
                .push("gender = ")
                .push_bind(gender.as_str());
        }
        if let Some(title) = filter.episode_name.as_deref() {
            predicates
                .and(&mut qb)
                .push(
                    "id IN (SELECT a.character_id FROM appearances a \
                     WHERE a.episode_id IN (SELECT e.id FROM episodes e \
                     WHERE LOWER(e.title) LIKE LOWER(",
                )
                .push_bind(contains_pattern(title))
                .push(") ESCAPE '\\'))");
        }

        push_page(&mut qb, "id", page);

        qb.build_query_as::<Character>().fetch_all(pool).await
    }

    /// List every character appearing in an episode, ordered by id.
    pub async fn list_for_episode(
        pool: &SqlitePool,
        episode_id: DbId,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {C_COLUMNS} FROM characters c
             JOIN appearances a ON a.character_id = c.id
             WHERE a.episode_id = $1
             ORDER BY c.id"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(episode_id)
            .fetch_all(pool)
            .await
    }
}
