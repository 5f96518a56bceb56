//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use rickmorty_core::error::CoreError;
use rickmorty_db::models::user::User;
use rickmorty_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Message returned when no credentials were presented at all.
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// Message returned for any presented credential that does not check out.
pub const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// The user behind a valid `Authorization: Bearer <token>` header.
///
/// The token subject is resolved to the current user row, so a token for a
/// user that has since been deleted or renamed is rejected.
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized(NOT_AUTHENTICATED.into())))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or_else(invalid_credentials)?;

        let claims = validate_token(token.trim(), &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            invalid_credentials()
        })?;

        let user = UserRepo::find_by_username(&state.pool, &claims.sub)
            .await?
            .ok_or_else(invalid_credentials)?;

        if user.disabled && state.config.reject_disabled_users {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is disabled".into(),
            )));
        }

        Ok(AuthUser { user })
    }
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
}
