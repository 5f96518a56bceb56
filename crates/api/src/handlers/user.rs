//! Handlers for signup and the `/users` resource.
//!
//! `/users/me*` act on the bearer-token user. `PUT /users` and
//! `DELETE /users?id=` address any user by id.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rickmorty_core::error::CoreError;
use rickmorty_core::types::DbId;
use rickmorty_db::models::comment::CommentFilter;
use rickmorty_db::models::user::{CreateUser, UpdateUser, User, UserFilter, UserResponse};
use rickmorty_db::repositories::{CommentRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{IdParams, PaginationParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body for `POST /api/v1/signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 64, message = "username must be 1 to 64 characters"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub password: String,
}

/// Body for `PUT /api/v1/users/me`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 64, message = "username must be 1 to 64 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    pub password: Option<String>,
    pub disabled: Option<bool>,
}

/// Body for `PUT /api/v1/users`: the target id plus the fields to change.
#[derive(Debug, Deserialize)]
pub struct UpdateUserByIdRequest {
    pub id: DbId,
    #[serde(flatten)]
    pub changes: UpdateUserRequest,
}

// ---------------------------------------------------------------------------
// Signup and lookup
// ---------------------------------------------------------------------------

/// POST /api/v1/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    ensure_username_available(&state, &input.username).await?;
    ensure_email_available(&state, &input.email).await?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "User signed up");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(user),
        }),
    ))
}

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> AppResult<impl IntoResponse> {
    let users: Vec<UserResponse> = UserRepo::list(&state.pool, &filter)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();
    Ok(Json(DataResponse { data: users }))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("User", id))?;
    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

// ---------------------------------------------------------------------------
// Self endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/users/me
pub async fn get_me(auth: AuthUser) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: UserResponse::from(auth.user),
    }))
}

/// PUT /api/v1/users/me
pub async fn update_me(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<impl IntoResponse> {
    let user = apply_user_update(&state, auth.user, input).await?;
    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

/// DELETE /api/v1/users/me
///
/// The user's comments go with them.
pub async fn delete_me(auth: AuthUser, State(state): State<AppState>) -> AppResult<StatusCode> {
    let id = auth.user.id;
    if !UserRepo::delete(&state.pool, id).await? {
        return Err(CoreError::not_found("User", id).into());
    }
    tracing::info!(user_id = id, "User deleted own account");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/users/me/comments
pub async fn list_my_comments(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let filter = CommentFilter {
        skip: params.skip,
        limit: params.limit,
        user_id: Some(auth.user.id),
        ..Default::default()
    };
    let comments = CommentRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: comments }))
}

// ---------------------------------------------------------------------------
// By-id administration
// ---------------------------------------------------------------------------

/// PUT /api/v1/users
pub async fn update_user(
    State(state): State<AppState>,
    Json(input): Json<UpdateUserByIdRequest>,
) -> AppResult<impl IntoResponse> {
    let id = input.id;
    let current = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::not_found("User", id))?;

    let user = apply_user_update(&state, current, input.changes).await?;
    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

/// DELETE /api/v1/users?id=
pub async fn delete_user(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<StatusCode> {
    let id = params.id;
    if !UserRepo::delete(&state.pool, id).await? {
        return Err(CoreError::not_found("User", id).into());
    }
    tracing::info!(user_id = id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Apply a partial update to `current`.
///
/// Only fields whose new value differs from the stored one are written, and
/// a new username or email must not belong to anyone else.
async fn apply_user_update(
    state: &AppState,
    current: User,
    input: UpdateUserRequest,
) -> AppResult<User> {
    input.validate()?;

    let mut changes = UpdateUser::default();

    if let Some(username) = input.username.filter(|u| *u != current.username) {
        ensure_username_available(state, &username).await?;
        changes.username = Some(username);
    }
    if let Some(email) = input.email.filter(|e| *e != current.email) {
        ensure_email_available(state, &email).await?;
        changes.email = Some(email);
    }
    if let Some(password) = input.password {
        validate_password_strength(&password, MIN_PASSWORD_LENGTH)
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
        let unchanged = verify_password(&password, &current.password_hash).unwrap_or(false);
        if !unchanged {
            let hash = hash_password(&password)
                .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))?;
            changes.password_hash = Some(hash);
        }
    }
    changes.disabled = input.disabled.filter(|d| *d != current.disabled);

    if changes.is_empty() {
        return Ok(current);
    }

    let id = current.id;
    let user = UserRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or(CoreError::not_found("User", id))?;

    tracing::info!(
        user_id = id,
        username_changed = changes.username.is_some(),
        email_changed = changes.email.is_some(),
        password_changed = changes.password_hash.is_some(),
        disabled = ?changes.disabled,
        "User updated",
    );

    Ok(user)
}

async fn ensure_username_available(state: &AppState, username: &str) -> AppResult<()> {
    if UserRepo::find_by_username(&state.pool, username).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "A user with this username already exists".into(),
        )));
    }
    Ok(())
}

async fn ensure_email_available(state: &AppState, email: &str) -> AppResult<()> {
    if UserRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "A user with this email already exists".into(),
        )));
    }
    Ok(())
}
