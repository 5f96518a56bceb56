pub mod auth;
pub mod character;
pub mod comment;
pub mod episode;
pub mod health;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /token                               login (POST, form)
/// /signup                              create account (POST)
///
/// /episodes                            list (filters)
/// /episodes/{id}                       get
/// /episodes/{id}/characters            characters in the episode
///
/// /characters                          list (filters)
/// /characters/{id}                     get
/// /characters/{id}/episodes            episodes the character is in
///
/// /comments                            list (filters), create (bearer)
/// /comments/export_csv                 CSV download
/// /comments/{id}                       get, update, delete
///
/// /users                               list, update by id (PUT), delete (?id=)
/// /users/me                            get, update, delete (bearer)
/// /users/me/comments                   own comments (bearer)
/// /users/{id}                          get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication and account creation.
        .merge(auth::router())
        // Reference data.
        .nest("/episodes", episode::router())
        .nest("/characters", character::router())
        // User-generated content.
        .nest("/comments", comment::router())
        .nest("/users", user::router())
}
