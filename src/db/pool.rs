use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Read pool sizing: the loaders fan every page request out to one query.
const READ_MAX_CONNECTIONS: u32 = 10;

/// The privileged path only ever runs single-row inserts, so the
/// service-role pool stays smaller than the read pool.
const SERVICE_MAX_CONNECTIONS: u32 = 4;

fn pool_options(max_connections: u32) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
}

/// Caller-scoped pool serving the read loaders.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    pool_options(READ_MAX_CONNECTIONS).connect(database_url).await
}

/// Pool for the service-role credential used by the writers.
pub async fn create_service_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    pool_options(SERVICE_MAX_CONNECTIONS).connect(database_url).await
}
