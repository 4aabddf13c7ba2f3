use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use brgy_api::config::Config;
use brgy_api::db::{
    create_pool, create_service_pool, PgItems, PgProfiles, ServiceRoleBarangays, ServiceRoleItems,
};
use brgy_api::handlers::{router, AppState};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brgy_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::info!("Starting brgy-api HTTP server...");
    tracing::info!("Connecting to database...");

    // Caller-scoped pool for reads
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection established");

    // Service-role pool for privileged inserts. Falling back to the caller
    // credential keeps local development working but loses the
    // row-level-security bypass, hence the warning.
    let service_pool = match &config.service_database_url {
        Some(url) => {
            tracing::info!("Service-role database connection enabled");
            create_service_pool(url).await?
        }
        None => {
            tracing::warn!(
                "SERVICE_DATABASE_URL not set, reusing DATABASE_URL for privileged writes"
            );
            pool.clone()
        }
    };

    let state = AppState {
        profiles: Arc::new(PgProfiles::new(pool.clone())),
        items: Arc::new(PgItems::new(pool.clone())),
        item_writer: Arc::new(ServiceRoleItems::new(service_pool.clone())),
        barangay_writer: Arc::new(ServiceRoleBarangays::new(service_pool)),
        jwt_secret: config.jwt_secret.clone(),
    };

    // Parse server address
    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
