use sqlx::{migrate::MigrateError, postgres::PgPoolOptions, PgPool};

use crate::config::DbConfig;

/// Build the pool without connecting; the first query opens a connection, so
/// the service starts even when the database is down.
pub fn lazy_pool(cfg: &DbConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(cfg.acquire_timeout)
        .connect_lazy(&cfg.url)?;
    Ok(pool)
}

pub async fn migrate(db: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(db).await
}
