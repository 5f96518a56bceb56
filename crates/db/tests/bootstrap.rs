//! Schema bootstrap and constraint tests.

use sqlx::SqlitePool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: SqlitePool) {
    rickmorty_db::health_check(&pool).await.unwrap();

    let tables = ["episodes", "characters", "appearances", "users", "comments"];
    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Characters reject status values outside the closed set.
#[sqlx::test(migrations = "./migrations")]
async fn test_character_status_check_constraint(pool: SqlitePool) {
    let result = sqlx::query(
        "INSERT INTO characters (id, name, status, species, character_type, gender)
         VALUES (1, 'Squanchy', 'squanched', 'Cat-like', '', 'male')",
    )
    .execute(&pool)
    .await;

    assert!(result.is_err(), "unknown status must violate the CHECK constraint");
}

/// Appearances must reference existing episodes and characters.
#[sqlx::test(migrations = "./migrations")]
async fn test_appearance_foreign_keys_enforced(pool: SqlitePool) {
    let result = sqlx::query("INSERT INTO appearances (episode_id, character_id) VALUES (99, 99)")
        .execute(&pool)
        .await;

    assert!(result.is_err(), "dangling appearance must violate foreign keys");
}

/// A comment with neither target is rejected at the storage level too.
#[sqlx::test(migrations = "./migrations")]
async fn test_comment_target_check_constraint(pool: SqlitePool) {
    sqlx::query(
        "INSERT INTO users (username, email, password_hash) VALUES ('birdperson', 'bp@example.com', 'x')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let result = sqlx::query(
        "INSERT INTO comments (content, episode_id, character_id, user_id) VALUES ('hi', NULL, NULL, 1)",
    )
    .execute(&pool)
    .await;

    assert!(result.is_err(), "comment without target must violate the CHECK constraint");
}
