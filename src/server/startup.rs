use axum::http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::server::{
    config::{AllowedOrigins, Config},
    error::AppError,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the database using the connection string from
/// configuration, verifies it with a ping, then runs all pending SeaORM migrations so
/// every record table exists. There is no retry: a failure here is logged and returned,
/// and the process is expected to exit.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await.inspect_err(|e| {
        tracing::error!("Failed to connect to database: {}", e);
    })?;
    db.ping().await.inspect_err(|e| {
        tracing::error!("Database did not answer ping: {}", e);
    })?;

    tracing::info!("Connected to database");

    Migrator::up(&db, None).await.inspect_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
    })?;

    Ok(db)
}

/// Closes the database connection pool.
///
/// Called once after the server has drained in-flight requests.
pub async fn disconnect_from_database(db: sea_orm::DatabaseConnection) {
    match db.close().await {
        Ok(()) => tracing::info!("Disconnected from database"),
        Err(e) => tracing::error!("Error while closing database connection: {}", e),
    }
}

/// Builds the CORS layer from the configured origin allow-list.
///
/// Only the methods used by the collection routes are allowed, and the only request
/// header clients may set is `Content-Type`.
pub fn setup_cors(config: &Config) -> CorsLayer {
    let origin = match &config.allowed_origins {
        AllowedOrigins::Any => {
            tracing::warn!("CORS allows every origin");
            AllowOrigin::from(Any)
        }
        AllowedOrigins::List(origins) => AllowOrigin::list(origins.clone()),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}

/// Resolves once the process receives Ctrl-C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
