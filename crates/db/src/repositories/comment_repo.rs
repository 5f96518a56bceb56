//! Repository for the `comments` table.

use rickmorty_core::pagination::{Page, DEFAULT_COMMENT_LIMIT};
use rickmorty_core::types::DbId;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::{push_page, Predicates};
use crate::models::comment::{Comment, CommentFilter, CreateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, content, episode_id, character_id, user_id";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateComment,
        user_id: DbId,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (content, episode_id, character_id, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(&input.content)
            .bind(input.episode_id)
            .bind(input.character_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List comments matching every present criterion, ordered by id.
    pub async fn list(
        pool: &SqlitePool,
        filter: &CommentFilter,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let page = Page::new(filter.skip, filter.limit, DEFAULT_COMMENT_LIMIT);

        let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT {COLUMNS} FROM comments"));
        let mut predicates = Predicates::default();

        if let Some(episode_id) = filter.episode_id {
            predicates
                .and(&mut qb)
                .push("episode_id = ")
                .push_bind(episode_id);
        }
        if let Some(character_id) = filter.character_id {
            predicates
                .and(&mut qb)
                .push("character_id = ")
                .push_bind(character_id);
        }
        if let Some(user_id) = filter.user_id {
            predicates.and(&mut qb).push("user_id = ").push_bind(user_id);
        }

        push_page(&mut qb, "id", page);

        qb.build_query_as::<Comment>().fetch_all(pool).await
    }

    /// List every comment, unpaginated, ordered by id. Used by the CSV export.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments ORDER BY id");
        sqlx::query_as::<_, Comment>(&query).fetch_all(pool).await
    }

    /// Replace a comment's content.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_content(
        pool: &SqlitePool,
        id: DbId,
        content: &str,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET content = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all comments.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
