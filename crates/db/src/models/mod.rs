//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for full-replace updates (absent fields become NULL)
//!
//! Input DTOs reject unknown keys so a typo in a payload is an error rather
//! than a silently dropped field.

pub mod director;
pub mod genre;
pub mod movie;
