//! Route definitions for the `/missions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::mission;
use crate::state::AppState;

/// Routes mounted at `/missions`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(mission::list).post(mission::create))
}
