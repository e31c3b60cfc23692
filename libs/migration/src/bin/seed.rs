use core_config::{Environment, FromEnv, logging::LogConfig, tracing::init_tracing};
use migration::{Migrator, MigratorTrait, seed};
use sea_orm::Database;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init_tracing(&Environment::from_env(), &LogConfig::from_env()?);

    let url = core_config::env_required("DATABASE_URL")?;
    let db = Database::connect(url.as_str()).await?;

    Migrator::up(&db, None).await?;
    let report = seed::run(&db).await?;
    info!(
        materials = report.materials,
        users = report.users,
        "Seed data inserted"
    );

    db.close().await?;
    Ok(())
}
