use users_backend_mongo::{
    config::AppConfig, logging::init_telemetry, routes::create_router, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables first
    dotenvy::dotenv().ok();

    // Initialize structured logging
    init_telemetry(None)?;

    tracing::info!("Starting Users Backend Application");

    let config = AppConfig::from_env();

    // Connect to MongoDB once at startup; handlers share the pooled client
    let state = AppState::new(&config).await?;

    tracing::info!(database = %config.database, "Database initialized successfully");

    // Create router with all routes
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Log server startup with structured telemetry
    tracing::info!(
        address = %addr,
        port = %config.port,
        "Server listening and ready to accept connections"
    );

    tracing::info!(
        endpoints = ?vec![
            "GET /user/:id - fetch one user",
            "GET /user - fetch all users",
            "POST /user - create a user",
            "PATCH /user/:id - update a user",
            "DELETE /user/:id - delete a user",
            "GET /health - health check",
        ],
        "Available API endpoints"
    );

    // Start the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::warn!("Shutdown signal received, cleaning up...");
}
