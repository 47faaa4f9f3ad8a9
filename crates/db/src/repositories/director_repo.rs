//! Repository for the `directors` table.

use cinema_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::director::{CreateDirector, Director, UpdateDirector};

const COLUMNS: &str = "id, name";

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateDirector,
    ) -> Result<Director, sqlx::Error> {
        let query = format!("INSERT INTO directors (name) VALUES (?1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Director>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a director by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors WHERE id = ?1");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all directors in insertion order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors ORDER BY id");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }

    /// Replace a director's fields. Returns `None` if the row does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateDirector,
    ) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("UPDATE directors SET name = ?2 WHERE id = ?1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a director by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign key violation while any movie still references
    /// the director.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM directors WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
