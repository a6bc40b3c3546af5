//! Route definitions for the `/scientists` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::scientist;
use crate::state::AppState;

/// Routes mounted at `/scientists`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(scientist::list).post(scientist::create))
        .route(
            "/{id}",
            get(scientist::get_by_id)
                .patch(scientist::update)
                .delete(scientist::delete),
        )
}
