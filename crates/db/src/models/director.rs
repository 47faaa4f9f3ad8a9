//! Director entity model and DTOs.

use cinema_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A director row from the `directors` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: Option<String>,
}

/// DTO for creating a new director.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateDirector {
    pub name: Option<String>,
}

/// DTO for replacing a director. A missing `name` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateDirector {
    pub name: Option<String>,
}
