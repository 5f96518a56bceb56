//! Handlers for the `/comments` resource.
//!
//! Creating a comment requires a bearer token; the author is always the
//! authenticated user. Listing, reading, editing and deleting are open.

use axum::extract::{Path, Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rickmorty_core::comment::{validate_content, validate_target};
use rickmorty_core::csv::{build_csv, optional_field};
use rickmorty_core::error::CoreError;
use rickmorty_core::types::DbId;
use rickmorty_db::models::comment::{CommentFilter, CreateComment, UpdateComment};
use rickmorty_db::repositories::{CharacterRepo, CommentRepo, EpisodeRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Column order of the CSV export.
const CSV_HEADER: [&str; 5] = ["id", "content", "episode_id", "character_id", "user_id"];

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// GET /api/v1/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Query(filter): Query<CommentFilter>,
) -> AppResult<impl IntoResponse> {
    let comments = CommentRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// GET /api/v1/comments/{id}
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let comment = CommentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("Comment", id))?;
    Ok(Json(DataResponse { data: comment }))
}

/// GET /api/v1/comments/export_csv
///
/// Streams every comment as a CSV attachment, one row per comment.
pub async fn export_csv(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let comments = CommentRepo::list_all(&state.pool).await?;
    let row_count = comments.len();

    let csv = build_csv(
        &CSV_HEADER,
        comments.into_iter().map(|c| {
            vec![
                c.id.to_string(),
                c.content,
                optional_field(c.episode_id),
                optional_field(c.character_id),
                c.user_id.to_string(),
            ]
        }),
    );

    tracing::info!(row_count, "Exported comments as CSV");

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8"),
            (CONTENT_DISPOSITION, "attachment; filename=\"comments.csv\""),
        ],
        csv,
    ))
}

// ---------------------------------------------------------------------------
// Write
// ---------------------------------------------------------------------------

/// POST /api/v1/comments
///
/// The comment must reference an episode, a character, or both, and every
/// referenced id must exist.
pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    validate_content(&input.content)?;
    validate_target(input.episode_id, input.character_id)?;

    if let Some(episode_id) = input.episode_id {
        if !EpisodeRepo::exists(&state.pool, episode_id).await? {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Episode {episode_id} does not exist"
            ))));
        }
    }
    if let Some(character_id) = input.character_id {
        if !CharacterRepo::exists(&state.pool, character_id).await? {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Character {character_id} does not exist"
            ))));
        }
    }

    let comment = CommentRepo::create(&state.pool, &input, auth.user.id).await?;

    tracing::info!(
        comment_id = comment.id,
        user_id = auth.user.id,
        episode_id = ?comment.episode_id,
        character_id = ?comment.character_id,
        "Comment created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// PUT /api/v1/comments/{id}
///
/// Only the content can change; a body with any other field is rejected by
/// the JSON extractor.
pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComment>,
) -> AppResult<impl IntoResponse> {
    validate_content(&input.content)?;

    let comment = CommentRepo::update_content(&state.pool, id, &input.content)
        .await?
        .ok_or(CoreError::not_found("Comment", id))?;

    tracing::info!(comment_id = id, "Comment updated");

    Ok(Json(DataResponse { data: comment }))
}

/// DELETE /api/v1/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !CommentRepo::delete(&state.pool, id).await? {
        return Err(CoreError::not_found("Comment", id).into());
    }

    tracing::info!(comment_id = id, "Comment deleted");

    Ok(StatusCode::NO_CONTENT)
}
