//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::pagination::pagination;
use cinema_core::types::DbId;
use cinema_db::models::movie::{CreateMovie, Movie, MovieQuery, UpdateMovie};
use cinema_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::query::MovieListParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "movie", id })
}

/// GET /movies/?page=&page_size=&director_id=&genre_id=
///
/// Filters are applied before pagination. Defaults: page 1, 10 per page.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let request = params.parse()?;

    let mut query = MovieQuery::all();
    if let Some(director_id) = request.director_id {
        query = query.director(director_id);
    }
    if let Some(genre_id) = request.genre_id {
        query = query.genre(genre_id);
    }
    let query = pagination(query, request.page, request.page_size);

    let movies = MovieRepo::list(&state.pool, &query).await?;
    Ok(Json(movies))
}

/// POST /movies/
///
/// Responds with an empty body and the new resource's `Location`.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, "Movie created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/movies/{}", movie.id))],
    ))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(movie))
}

/// PUT /movies/{id}
///
/// Full replace: fields missing from the payload are cleared.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<StatusCode> {
    MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(movie_id = id, "Movie replaced");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /movies/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if MovieRepo::delete(&state.pool, id).await? {
        tracing::info!(movie_id = id, "Movie deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
