//! Repository for the `movies` table.

use cinema_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::movie::{CreateMovie, Movie, MovieQuery, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, trailer, year, rating, director_id, genre_id";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, description, trailer, year, rating, director_id, genre_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.director_id)
            .bind(input.genre_id)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = ?1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Evaluate a [`MovieQuery`].
    ///
    /// Rows come back in insertion (`id`) order. Filters are ANDed; a query
    /// without a window returns every matching row.
    pub async fn list(pool: &SqlitePool, filter: &MovieQuery) -> Result<Vec<Movie>, sqlx::Error> {
        // SQLite treats a negative LIMIT as "no limit".
        let (limit, offset) = filter
            .window
            .map_or((-1, 0), |w| (w.limit, w.offset));

        tracing::debug!(
            director_id = ?filter.director_id,
            genre_id = ?filter.genre_id,
            limit,
            offset,
            "Listing movies"
        );

        let query = format!(
            "SELECT {COLUMNS} FROM movies
             WHERE (?1 IS NULL OR director_id = ?1)
               AND (?2 IS NULL OR genre_id = ?2)
             ORDER BY id
             LIMIT ?3 OFFSET ?4"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(filter.director_id)
            .bind(filter.genre_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable column of a movie.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = ?2,
                description = ?3,
                trailer = ?4,
                year = ?5,
                rating = ?6,
                director_id = ?7,
                genre_id = ?8
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.director_id)
            .bind(input.genre_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
