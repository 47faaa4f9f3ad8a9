//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes for movies.
///
/// ```text
/// GET    /movies/        -> list (?page=&page_size=&director_id=&genre_id=)
/// POST   /movies/        -> create
/// GET    /movies/{id}    -> get_by_id
/// PUT    /movies/{id}    -> update
/// DELETE /movies/{id}    -> delete
/// ```
///
/// The collection answers with and without the trailing slash.
pub fn router() -> Router<AppState> {
    let collection = get(movie::list).post(movie::create);

    Router::new()
        .route("/movies", collection.clone())
        .route("/movies/", collection)
        .route(
            "/movies/{id}",
            get(movie::get_by_id)
                .put(movie::update)
                .delete(movie::delete),
        )
}
