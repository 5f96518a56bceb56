mod common;

use axum::http::StatusCode;
use common::{body_json, get, ids};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_characters(pool: SqlitePool) {
    common::seed_reference_data(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/characters").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(ids(&json), vec![1, 2, 3]);
    assert_eq!(json["data"][0]["name"], "Rick Sanchez");
    assert_eq!(json["data"][0]["status"], "alive");
    assert_eq!(json["data"][0]["gender"], "male");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_status_and_species_filters(pool: SqlitePool) {
    common::seed_reference_data(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/characters?status=dead").await;
    assert_eq!(ids(&body_json(response).await), vec![3]);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/characters?species=Human&gender=male").await;
    assert_eq!(ids(&body_json(response).await), vec![1, 2]);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/characters?species=Hum").await;
    assert!(ids(&body_json(response).await).is_empty(), "species is exact match");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_episode_name_filter(pool: SqlitePool) {
    common::seed_reference_data(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/characters?episode_name=lawnmower").await;
    assert_eq!(ids(&body_json(response).await), vec![2, 3]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_status_value_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/characters?status=zombie").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_character_and_episodes(pool: SqlitePool) {
    common::seed_reference_data(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/characters/1").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "Rick Sanchez");

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/characters/1/episodes").await;
    assert_eq!(ids(&body_json(response).await), vec![1, 3]);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/characters/42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
