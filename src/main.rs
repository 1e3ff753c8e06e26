//!
//! Product catalog REST API server.
//! Reads configuration from TOML file (~/.config/catalog-service/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use catalog_service::application::ProductService;
use catalog_service::config::AppConfig;
use catalog_service::domain::ProductRepository;
use catalog_service::infrastructure::database::migrator::Migrator;
use catalog_service::shared::{listen_for_shutdown_signals, ShutdownSignal};
use catalog_service::{
    create_api_router, default_config_path, init_database, DatabaseConfig, SeaOrmProductRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("CATALOG_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Product Catalog Service...");

    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // ── Service wiring (explicit constructors, no DI container) ─
    let sort_mode = app_cfg.catalog.sort_mode()?;
    let repository: Arc<dyn ProductRepository> = Arc::new(SeaOrmProductRepository::new(db.clone()));
    let service = Arc::new(ProductService::new(repository, sort_mode));
    info!("Product listing sort mode: {}", sort_mode);

    let api_router = create_api_router(service);

    // ── Serve with graceful shutdown ───────────────────────────
    let shutdown = ShutdownSignal::new();
    tokio::spawn(listen_for_shutdown_signals(shutdown.clone()));

    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    let serve_shutdown = shutdown.clone();
    axum::serve(listener, api_router)
        .with_graceful_shutdown(async move {
            serve_shutdown.wait().await;
            info!("REST API server received shutdown signal");
        })
        .await?;

    // Final cleanup
    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Product Catalog Service shutdown complete");
    Ok(())
}
