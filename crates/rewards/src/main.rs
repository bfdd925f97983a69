use anyhow::{Context, Result};
use dotenv::dotenv;
use rewards::{handler::AppRouter, state::AppState};
use shared::{
    config::{Config, ConnectionManager},
    utils::Logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _logger = Logger::init("rewards", config.is_dev).context("Failed to initialize logger")?;

    let db = ConnectionManager::new_pool(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to create database pool")?;

    if config.run_migrations {
        ConnectionManager::run_migrations(&db)
            .await
            .context("Failed to migrate database")?;
    }

    let state = AppState::new(db)
        .await
        .context("Failed to create AppState")?;

    info!("🚀 Rewards service starting on port {}", config.port);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    Ok(())
}
