//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Application state containing shared resources.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// token is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Bearer token required on guarded routes; `None` disables the guard.
    pub api_token: Option<Arc<str>>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `api_token` - Optional static bearer token
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, api_token: Option<String>) -> Self {
        Self {
            db,
            api_token: api_token.map(Arc::from),
        }
    }
}
