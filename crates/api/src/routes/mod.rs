pub mod health;
pub mod mission;
pub mod planet;
pub mod scientist;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /scientists                 list, create
/// /scientists/{id}            get (with missions), patch, delete (cascades)
///
/// /planets                    list
///
/// /missions                   list, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/scientists", scientist::router())
        .nest("/planets", planet::router())
        .nest("/missions", mission::router())
}
