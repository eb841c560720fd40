use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is already reference-counted and
/// the config sits behind `Arc`). Handlers receive the store handle
/// through this state rather than any process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: photodesk_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
