//! Request handlers for the catalogue entities.
//!
//! Each submodule provides async handler functions for a single entity
//! type. Handlers delegate to the corresponding repository in `cinema_db`
//! and map errors via [`AppError`](crate::error::AppError).

pub mod director;
pub mod genre;
pub mod movie;
