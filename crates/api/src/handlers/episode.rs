//! Handlers for the `/episodes` resource.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use rickmorty_core::error::CoreError;
use rickmorty_core::types::DbId;
use rickmorty_db::models::episode::EpisodeFilter;
use rickmorty_db::repositories::{CharacterRepo, EpisodeRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/episodes
///
/// Every query parameter is an optional filter; absent ones do not narrow
/// the result.
pub async fn list_episodes(
    State(state): State<AppState>,
    Query(filter): Query<EpisodeFilter>,
) -> AppResult<impl IntoResponse> {
    let episodes = EpisodeRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: episodes }))
}

/// GET /api/v1/episodes/{id}
pub async fn get_episode(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let episode = EpisodeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Episode", id))?;
    Ok(Json(DataResponse { data: episode }))
}

/// GET /api/v1/episodes/{id}/characters
pub async fn list_episode_characters(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !EpisodeRepo::exists(&state.pool, id).await? {
        return Err(CoreError::not_found("Episode", id).into());
    }
    let characters = CharacterRepo::list_for_episode(&state.pool, id).await?;
    Ok(Json(DataResponse { data: characters }))
}
