//! Page-number pagination for list queries.
//!
//! Lives in `core` so the repository layer and the HTTP layer agree on the
//! same limit/offset arithmetic.

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Page returned when the client does not ask for one. Pages are 1-based.
pub const DEFAULT_PAGE: i64 = 1;

/// Number of records per page when the client does not specify `page_size`.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// A `LIMIT` / `OFFSET` pair ready to be bound into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub limit: i64,
    pub offset: i64,
}

impl Window {
    /// Compute the window for a 1-based `page_number` of `page_size` records.
    ///
    /// No bounds checking happens here; callers decide whether zero or
    /// negative values are acceptable. The offset saturates at `i64::MAX`.
    pub fn for_page(page_number: i64, page_size: i64) -> Self {
        Self {
            limit: page_size,
            offset: page_number.saturating_sub(1).saturating_mul(page_size),
        }
    }
}

/// A query description that can be narrowed to a [`Window`].
///
/// Implementors only record the window; nothing is executed.
pub trait Paginate: Sized {
    fn with_window(self, window: Window) -> Self;
}

/// Apply page-number pagination to `query`.
///
/// Returns the same query with `limit = page_size` and
/// `offset = (page_number - 1) * page_size`.
pub fn pagination<Q: Paginate>(query: Q, page_number: i64, page_size: i64) -> Q {
    query.with_window(Window::for_page(page_number, page_size))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
