use std::time::Duration;

use anyhow::Context;
use sqlx::{pool::PoolOptions, Pool, Postgres};

use crate::settings::Config;

pub async fn init_pool(config: &Config) -> anyhow::Result<Pool<Postgres>> {
    let pool = PoolOptions::new()
        .min_connections(1)
        .max_connections(config.db_max_connections)
        .idle_timeout(Duration::from_secs(30))
        .connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    Ok(pool)
}
