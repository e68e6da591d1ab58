//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. Both fields are cheap to clone: `DatabaseConnection` is a
//! pool handle and the auth client sits behind an `Arc`.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::auth::AuthClient;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the catalog tables.
    pub db: DatabaseConnection,

    /// Client for the external auth service.
    ///
    /// Held as a trait object so tests can substitute an in-process implementation.
    pub auth_client: Arc<dyn AuthClient>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, auth_client: Arc<dyn AuthClient>) -> Self {
        Self { db, auth_client }
    }
}
