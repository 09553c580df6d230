//! Products API - REST server for the product catalog

use std::sync::Arc;
use std::time::Duration;

use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use domain_products::{PgProductRepository, ProductService};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL");
    let db = connect_from_config_with_retry(config.postgres.clone(), None).await?;
    info!("Successfully connected to PostgreSQL");

    run_migrations::<migration::Migrator>(&db, config.app.name).await?;

    let repository = Arc::new(PgProductRepository::new(db.clone()));
    let service = ProductService::new(repository);

    let api_routes = api::routes(service);
    let app = create_router::<openapi::ApiDoc>(api_routes).merge(health_router());

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing PostgreSQL connections");
        if let Err(e) = db.close().await {
            tracing::warn!("Error closing PostgreSQL connection: {e}");
        }
    })
    .await?;

    info!("Products API shutdown complete");
    Ok(())
}
