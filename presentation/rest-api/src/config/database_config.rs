use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Catalog migrations to apply at startup (optional)
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
        Ok(value) => value
            .parse::<u32>()
            .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
        Err(_) => 5,
    };

    let config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_postgres_pool(&config).await?;

    if let Ok(path) = env::var("MIGRATIONS_PATH") {
        run_migrations(&pool, &path).await?;
        tracing::info!(path = %path, "catalog migrations applied");
    }

    Ok(pool)
}
