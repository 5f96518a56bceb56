use axum::routing::get;
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Character routes mounted at `/characters`.
///
/// ```text
/// GET /                -> list_characters
/// GET /{id}            -> get_character
/// GET /{id}/episodes   -> list_character_episodes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(character::list_characters))
        .route("/{id}", get(character::get_character))
        .route("/{id}/episodes", get(character::list_character_episodes))
}
