//! Movie entity model, DTOs, and the list query description.

use cinema_core::pagination::{Paginate, Window};
use cinema_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Trailer URL.
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}

/// DTO for creating a new movie. Every field is optional; absent fields are
/// stored as NULL.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovie {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}

/// DTO for replacing a movie. Every column is overwritten, so an absent
/// field clears the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}

/// Description of a movie list query: optional equality filters plus an
/// optional limit/offset window.
///
/// Building a `MovieQuery` never touches the database; pass it to
/// [`MovieRepo::list`](crate::repositories::MovieRepo::list) to evaluate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieQuery {
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
    pub window: Option<Window>,
}

impl MovieQuery {
    /// An unfiltered, unbounded query over all movies.
    pub fn all() -> Self {
        Self::default()
    }

    /// Keep only movies by the given director.
    pub fn director(mut self, director_id: DbId) -> Self {
        self.director_id = Some(director_id);
        self
    }

    /// Keep only movies of the given genre.
    pub fn genre(mut self, genre_id: DbId) -> Self {
        self.genre_id = Some(genre_id);
        self
    }
}

impl Paginate for MovieQuery {
    fn with_window(mut self, window: Window) -> Self {
        self.window = Some(window);
        self
    }
}
