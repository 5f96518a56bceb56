use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// User routes mounted at `/users`.
///
/// ```text
/// GET    /              -> list_users
/// PUT    /              -> update_user (id in body)
/// DELETE /?id=          -> delete_user
/// GET    /me            -> get_me (bearer)
/// PUT    /me            -> update_me (bearer)
/// DELETE /me            -> delete_me (bearer)
/// GET    /me/comments   -> list_my_comments (bearer)
/// GET    /{id}          -> get_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(user::list_users)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/me",
            get(user::get_me)
                .put(user::update_me)
                .delete(user::delete_me),
        )
        .route("/me/comments", get(user::list_my_comments))
        .route("/{id}", get(user::get_user))
}
