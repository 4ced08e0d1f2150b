use mongodb::{options::ClientOptions, Client, Database};
use std::time::Duration;
use tracing::info;

use crate::config::AppConfig;
use crate::errors::errors::{ServiceError, ServiceResult};

/// Connect to MongoDB and return a handle to the configured database
///
/// Connectivity is verified with a lightweight ping so a misconfigured URL fails
/// at startup instead of on the first request.
pub async fn connect(config: &AppConfig) -> ServiceResult<Database> {
    info!(url = %config.mongodb_url, "Attempting to connect to MongoDB");

    let mut options = ClientOptions::parse(&config.mongodb_url)
        .await
        .map_err(|e| ServiceError::DatabaseError(e.to_string()))?;

    options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    options.max_pool_size = Some(100);
    options.min_pool_size = Some(5);
    options.connect_timeout = Some(Duration::from_secs(10));
    options.server_selection_timeout = Some(Duration::from_secs(30));

    let client = Client::with_options(options)?;

    // Verify connection by listing databases (lightweight ping)
    client
        .list_database_names()
        .await
        .map_err(|_| ServiceError::DatabaseConnectionError)?;

    info!(database = %config.database, "Successfully connected to MongoDB");
    Ok(client.database(&config.database))
}

/// Check MongoDB health with a simple ping command
pub async fn check_health(db: &Database) -> bool {
    db.client().list_database_names().await.is_ok()
}
