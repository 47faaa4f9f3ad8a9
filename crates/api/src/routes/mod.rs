pub mod directors;
pub mod genres;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies/                list, create
/// /movies/{id}            get, replace, delete
///
/// /directors/             list, create
/// /directors/{id}         get, replace, delete
///
/// /genres/                list
/// /genres/{id}            get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(movies::router())
        .merge(directors::router())
        .merge(genres::router())
}
