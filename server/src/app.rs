use std::sync::Arc;

use access_db::Database;

use crate::config::ServerConfig;

/// Application shared state accessible from axum handlers.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Application configuration
    config: ServerConfig,
    /// Database handle
    db: Database,
}

impl SharedState {
    /// Create shared state from an already-opened database and loaded config.
    pub fn new(db: Database, config: ServerConfig) -> Self {
        Self {
            inner: Arc::new(SharedStateInner { config, db }),
        }
    }

    pub fn db(&self) -> &Database {
        &self.inner.db
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }
}
