/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The store handle is passed explicitly through this state; nothing in the
/// crate holds a global connection. Cloning is cheap (the pool is an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cinema_db::DbPool,
}
