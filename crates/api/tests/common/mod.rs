#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use jsonwebtoken::Algorithm;
use sqlx::SqlitePool;
use tower::ServiceExt;

use rickmorty_api::auth::jwt::JwtConfig;
use rickmorty_api::config::ServerConfig;
use rickmorty_api::logging::LogFormat;
use rickmorty_api::router::build_app_router;
use rickmorty_api::state::AppState;
use rickmorty_core::character::{CharacterGender, CharacterStatus};
use rickmorty_db::models::character::CreateCharacter;
use rickmorty_db::models::episode::CreateEpisode;
use rickmorty_db::repositories::{AppearanceRepo, CharacterRepo, EpisodeRepo};

/// Secret shared by the test app and tests that forge tokens.
pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        reject_disabled_users: false,
        log_format: LogFormat::Fmt,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry_mins: 30,
        },
    }
}

/// Build the full application router, exactly as `main.rs` does, over the
/// given pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Like [`build_test_app`] but with a caller-tweaked configuration.
pub fn build_test_app_with(pool: SqlitePool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should be handled")
}

fn request(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
        None => builder,
    }
}

fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    request(method, uri, token)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let req = request(Method::GET, uri, None)
        .body(Body::empty())
        .expect("request should build");
    send(app, req).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let req = request(Method::GET, uri, Some(token))
        .body(Body::empty())
        .expect("request should build");
    send(app, req).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::PUT, uri, None, body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::PUT, uri, Some(token), body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let req = request(Method::DELETE, uri, None)
        .body(Body::empty())
        .expect("request should build");
    send(app, req).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    let req = request(Method::DELETE, uri, Some(token))
        .body(Body::empty())
        .expect("request should build");
    send(app, req).await
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{k}={}", form_encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let req = request(Method::POST, uri, None)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("request should build");
    send(app, req).await
}

fn form_encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{b:02X}"),
        })
        .collect()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).expect("body should be UTF-8")
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Default password used by [`signup`].
pub const TEST_PASSWORD: &str = "string";

/// Sign up through the API and return the created user JSON.
pub async fn signup(pool: &SqlitePool, username: &str) -> serde_json::Value {
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@citadel.test"),
        "password": TEST_PASSWORD,
    });
    let response = post_json(build_test_app(pool.clone()), "/api/v1/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

/// Log in through the API and return the access token.
pub async fn login(pool: &SqlitePool, username: &str, password: &str) -> String {
    let response = post_form(
        build_test_app(pool.clone()),
        "/api/v1/token",
        &[("username", username), ("password", password)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string()
}

/// Sign up and log in; returns `(user_id, token)`.
pub async fn signup_and_login(pool: &SqlitePool, username: &str) -> (i64, String) {
    let user = signup(pool, username).await;
    let id = user["id"].as_i64().expect("user id should be an integer");
    let token = login(pool, username, TEST_PASSWORD).await;
    (id, token)
}

// ---------------------------------------------------------------------------
// Reference data
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Seed three episodes and three characters:
///
/// | id | title              | air date   | S | E |
/// |----|--------------------|------------|---|---|
/// | 1  | Pilot              | 2013-12-02 | 1 | 1 |
/// | 2  | Lawnmower Dog      | 2013-12-09 | 1 | 2 |
/// | 3  | A Rickle in Time   | 2015-07-26 | 2 | 1 |
///
/// Characters: 1 Rick Sanchez (alive, human, male) in episodes 1 and 3;
/// 2 Morty Smith (alive, human, male) in episodes 1 and 2;
/// 3 Snuffles (dead, animal, male) in episode 2.
pub async fn seed_reference_data(pool: &SqlitePool) {
    let episodes = [
        (1, "Pilot", date(2013, 12, 2), 1, 1),
        (2, "Lawnmower Dog", date(2013, 12, 9), 2, 1),
        (3, "A Rickle in Time", date(2015, 7, 26), 1, 2),
    ];
    for (id, title, air_date, episode_number, season_number) in episodes {
        EpisodeRepo::upsert(
            pool,
            &CreateEpisode {
                id,
                title: title.to_string(),
                air_date,
                episode_number,
                season_number,
            },
        )
        .await
        .expect("episode seed should succeed");
    }

    let characters = [
        (1, "Rick Sanchez", CharacterStatus::Alive, "Human"),
        (2, "Morty Smith", CharacterStatus::Alive, "Human"),
        (3, "Snuffles", CharacterStatus::Dead, "Animal"),
    ];
    for (id, name, status, species) in characters {
        CharacterRepo::upsert(
            pool,
            &CreateCharacter {
                id,
                name: name.to_string(),
                status,
                species: species.to_string(),
                character_type: String::new(),
                gender: CharacterGender::Male,
            },
        )
        .await
        .expect("character seed should succeed");
    }

    for (episode_id, character_id) in [(1, 1), (3, 1), (1, 2), (2, 2), (2, 3)] {
        AppearanceRepo::link(pool, episode_id, character_id)
            .await
            .expect("appearance seed should succeed");
    }
}

/// Ids of a `{ "data": [...] }` list response, in order.
pub fn ids(json: &serde_json::Value) -> Vec<i64> {
    json["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|item| item["id"].as_i64().expect("id should be an integer"))
        .collect()
}
