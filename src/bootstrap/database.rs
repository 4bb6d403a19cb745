use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;

use crate::shared::config::Config;
use crate::shared::error::AppResult;

pub async fn connect(config: &Config) -> AppResult<DatabaseConnection> {
    let mut opt = ConnectOptions::new(config.database_url());
    opt.max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .connect_timeout(Duration::from_secs(config.database_connect_timeout))
        .idle_timeout(Duration::from_secs(config.database_idle_timeout))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    tracing::info!("Connected to {} database", config.db_driver);
    Ok(db)
}

pub async fn migrate(db: &DatabaseConnection) -> AppResult<()> {
    Migrator::up(db, None).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
