use std::sync::Arc;

use anyhow::anyhow;
use poem::listener::TcpListener;
use portfolio_site::{
    core::{db::init_pool, security::hash_admin_code},
    init_openapi_route,
    settings::get_config,
    AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_config()?;

    // Logging to File
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    // Logging to Console
    // tracing_subscriber::fmt().with_env_filter(EnvFilter::new(&config.log_level)).init();

    tracing::info!(
        env = %config.env,
        host = %config.host,
        port = config.port,
        prefix = ?config.prefix,
        "starting portfolio site"
    );

    // Init Database Connection
    tracing::info!("Init Postgres connection");
    let pool = init_pool(&config).await?;
    // Admin code never leaves memory in plain text past this point
    let admin_code_hash = hash_admin_code(&config.admin_code).map_err(|err| anyhow!(err))?;
    let app_state = Arc::new(AppState {
        db: pool,
        admin_code_hash,
    });

    let app = init_openapi_route(app_state.clone(), &config);
    tracing::info!("run server on {}:{}", config.host, config.port);
    poem::Server::new(TcpListener::bind(format!(
        "{}:{}",
        config.host, config.port
    )))
    .run(app)
    .await?;
    Ok(())
}
