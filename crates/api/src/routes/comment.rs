use axum::routing::get;
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// Comment routes mounted at `/comments`.
///
/// ```text
/// GET    /              -> list_comments
/// POST   /              -> create_comment (bearer)
/// GET    /export_csv    -> export_csv
/// GET    /{id}          -> get_comment
/// PUT    /{id}          -> update_comment
/// DELETE /{id}          -> delete_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(comment::list_comments).post(comment::create_comment),
        )
        .route("/export_csv", get(comment::export_csv))
        .route(
            "/{id}",
            get(comment::get_comment)
                .put(comment::update_comment)
                .delete(comment::delete_comment),
        )
}
