//! Route definitions for login and signup.

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Routes merged at the `/api/v1` root.
///
/// ```text
/// POST /token   -> login
/// POST /signup  -> signup
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/token", post(handlers::auth::login))
        .route("/signup", post(handlers::user::signup))
}
