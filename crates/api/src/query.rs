//! Query parameter types for API handlers.

use cinema_core::error::CoreError;
use cinema_core::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use cinema_core::params::{parse_integer, parse_positive};
use cinema_core::types::DbId;
use serde::Deserialize;

/// Raw `?page=&page_size=&director_id=&genre_id=` parameters of the movie list.
///
/// Values are kept as strings so that a malformed value is reported with
/// the offending parameter's name; see [`MovieListParams::parse`].
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}

/// Validated movie list parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieListRequest {
    pub page: i64,
    pub page_size: i64,
    pub director_id: Option<DbId>,
    pub genre_id: Option<DbId>,
}

impl MovieListParams {
    /// Parse and validate all parameters, in `page`, `page_size`,
    /// `director_id`, `genre_id` order. The first invalid value wins.
    pub fn parse(&self) -> Result<MovieListRequest, CoreError> {
        Ok(MovieListRequest {
            page: parse_positive("page", self.page.as_deref(), DEFAULT_PAGE)?,
            page_size: parse_positive("page_size", self.page_size.as_deref(), DEFAULT_PAGE_SIZE)?,
            director_id: parse_integer("director_id", self.director_id.as_deref())?,
            genre_id: parse_integer("genre_id", self.genre_id.as_deref())?,
        })
    }
}
