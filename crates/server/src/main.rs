use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{
    config::{Config, ConnectionManager},
    state::AppState,
    utils::init_logger,
};
use tracing::info;
use trivia_server::handler::AppRouter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    init_logger("trivia-server", config.log_format);

    let pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_max_connections,
        config.run_migrations,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.seed_database {
        ConnectionManager::seed(&pool)
            .await
            .context("Failed to seed database")?;
    }

    info!(search_match = %config.search_match, "Search strategy configured");

    let state = AppState::new(pool.clone(), config.search_match);

    AppRouter::serve(config.port, state).await?;

    pool.close().await;
    info!("Database pool closed, bye");

    Ok(())
}
