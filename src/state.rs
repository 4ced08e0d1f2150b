use mongodb::Database;

use crate::config::AppConfig;
use crate::errors::errors::ServiceResult;
use crate::store::{client, UserStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Data access layer for the users collection
    pub users: UserStore,
    /// Database handle, kept for health checks
    pub db: Database,
}

impl AppState {
    /// Create new application state, connecting to MongoDB
    pub async fn new(config: &AppConfig) -> ServiceResult<Self> {
        let db = client::connect(config).await?;

        Ok(Self {
            users: UserStore::new(&db),
            db,
        })
    }

    /// Build state from an existing database handle (used by tests)
    pub fn with_database(db: Database) -> Self {
        Self {
            users: UserStore::new(&db),
            db,
        }
    }
}
