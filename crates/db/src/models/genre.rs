//! Genre entity model and DTOs.
//!
//! Genres are read-only over HTTP; [`CreateGenre`] is used for seeding.

use cinema_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A genre row from the `genres` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: Option<String>,
}

/// DTO for creating a new genre.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateGenre {
    pub name: Option<String>,
}
