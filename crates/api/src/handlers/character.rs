//! Handlers for the `/characters` resource.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use rickmorty_core::error::CoreError;
use rickmorty_core::types::DbId;
use rickmorty_db::models::character::CharacterFilter;
use rickmorty_db::repositories::{CharacterRepo, EpisodeRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/characters
///
/// An unknown `status` or `gender` value is rejected by the query extractor.
pub async fn list_characters(
    State(state): State<AppState>,
    Query(filter): Query<CharacterFilter>,
) -> AppResult<impl IntoResponse> {
    let characters = CharacterRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: characters }))
}

/// GET /api/v1/characters/{id}
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Character", id))?;
    Ok(Json(DataResponse { data: character }))
}

/// GET /api/v1/characters/{id}/episodes
pub async fn list_character_episodes(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !CharacterRepo::exists(&state.pool, id).await? {
        return Err(CoreError::not_found("Character", id).into());
    }
    let episodes = EpisodeRepo::list_for_character(&state.pool, id).await?;
    Ok(Json(DataResponse { data: episodes }))
}
