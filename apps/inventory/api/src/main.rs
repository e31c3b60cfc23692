use axum_helpers::server::{close_pool, create_production_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{check_health, connect_from_config, run_migrations};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod app;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment, &config.log);

    // One pool for the whole process; repositories receive handles to it
    let db = connect_from_config(config.database.clone()).await?;
    check_health(&db).await?;

    if config.run_migrations {
        run_migrations::<Migrator>(&db, config.app.name).await?;
    }

    let server = config.server.clone();
    let window = config.rate_limit.window;
    let state = AppState {
        config,
        db: db.clone(),
    };

    let (router, limiter) = app::build(state)?;

    // Forget clients whose budget has fully replenished
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(window);
        loop {
            interval.tick().await;
            limiter.retain_recent();
        }
    });

    info!("Starting inventory API with production-ready shutdown (30s timeout)");

    create_production_app(router, &server, Duration::from_secs(30), async move {
        close_pool(db).await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Inventory API shutdown complete");
    Ok(())
}
