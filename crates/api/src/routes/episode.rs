use axum::routing::get;
use axum::Router;

use crate::handlers::episode;
use crate::state::AppState;

/// Episode routes mounted at `/episodes`.
///
/// ```text
/// GET /                  -> list_episodes
/// GET /{id}              -> get_episode
/// GET /{id}/characters   -> list_episode_characters
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(episode::list_episodes))
        .route("/{id}", get(episode::get_episode))
        .route("/{id}/characters", get(episode::list_episode_characters))
}
