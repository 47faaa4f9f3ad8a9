//! Handlers for the `/directors` resource.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use cinema_core::error::CoreError;
use cinema_core::types::DbId;
use cinema_db::models::director::{CreateDirector, Director, UpdateDirector};
use cinema_db::repositories::DirectorRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /directors/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors))
}

/// POST /directors/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDirector>,
) -> AppResult<impl IntoResponse> {
    let director = DirectorRepo::create(&state.pool, &input).await?;
    tracing::info!(director_id = director.id, "Director created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/directors/{}", director.id))],
    ))
}

/// GET /directors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Director>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "director",
            id,
        }))?;
    Ok(Json(director))
}

/// PUT /directors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDirector>,
) -> AppResult<StatusCode> {
    DirectorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "director",
            id,
        }))?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /directors/{id}
///
/// Refused with 409 while movies still reference the director.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = DirectorRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(director_id = id, "Director deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "director",
            id,
        }))
    }
}
